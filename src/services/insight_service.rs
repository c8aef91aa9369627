use std::sync::Arc;

use crate::config::SearchConfig;
use crate::models::{
    CompetitorChannel, Description, SearchResult, SeoVideo, TrendingVideo, NO_DESCRIPTION,
};
use crate::services::{SearchError, SearchProvider};
use crate::utils::{extract_hashtags, rank_by_views, truncate_chars, DESCRIPTION_LIMIT};

/// Search-backed analyses: shorts trends, SEO top videos, competitor channels.
#[derive(Clone)]
pub struct InsightService {
    provider: Arc<dyn SearchProvider>,
    search: SearchConfig,
}

impl InsightService {
    pub fn new(provider: Arc<dyn SearchProvider>, search: SearchConfig) -> Self {
        Self { provider, search }
    }

    pub fn provider(&self) -> Arc<dyn SearchProvider> {
        self.provider.clone()
    }

    pub async fn shorts_trends(&self, keyword: &str) -> Result<Vec<TrendingVideo>, SearchError> {
        let query = qualified(keyword, &self.search.shorts_qualifier);
        let results = self
            .provider
            .search(&query, self.search.trends_results)
            .await?;
        Ok(rank_trends(results))
    }

    pub async fn seo_analysis(&self, keyword: &str) -> Result<Vec<SeoVideo>, SearchError> {
        let results = self
            .provider
            .search(keyword.trim(), self.search.seo_results)
            .await?;
        Ok(rank_seo(results))
    }

    pub async fn competitor_channels(
        &self,
        keyword: &str,
    ) -> Result<Vec<CompetitorChannel>, SearchError> {
        let query = qualified(keyword, &self.search.channel_qualifier);
        let results = self
            .provider
            .search(&query, self.search.competitor_results)
            .await?;
        Ok(results
            .into_iter()
            .map(|result| CompetitorChannel {
                name: result.title,
                url: result.url,
            })
            .collect())
    }
}

fn qualified(keyword: &str, qualifier: &str) -> String {
    format!("{} {}", keyword.trim(), qualifier).trim().to_string()
}

pub fn rank_trends(results: Vec<SearchResult>) -> Vec<TrendingVideo> {
    let mut videos: Vec<TrendingVideo> = results
        .into_iter()
        .map(|result| TrendingVideo {
            hashtags: extract_hashtags(&result.title),
            view_count: result.views(),
            title: result.title,
            url: result.url,
        })
        .collect();
    rank_by_views(&mut videos, |video| video.view_count);
    videos
}

/// Present text and an absent key are cut and marked with the ellipsis;
/// an explicit null shows the bare placeholder.
fn seo_description(result: &SearchResult) -> String {
    match result.description {
        Description::Null => NO_DESCRIPTION.to_string(),
        Description::Text(_) | Description::Missing => {
            truncate_chars(result.description(), DESCRIPTION_LIMIT)
        }
    }
}

pub fn rank_seo(results: Vec<SearchResult>) -> Vec<SeoVideo> {
    let mut videos: Vec<SeoVideo> = results
        .into_iter()
        .map(|result| SeoVideo {
            description: seo_description(&result),
            view_count: result.views(),
            title: result.title,
            url: result.url,
        })
        .collect();
    rank_by_views(&mut videos, |video| video.view_count);
    videos
}
