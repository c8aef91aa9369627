use rand::seq::SliceRandom;
use rand::Rng;

pub const TIPS_PER_CALL: usize = 3;

pub const TIP_CATALOG: [&str; 5] = [
    "📌 Keep titles short and punchy (e.g. '🔥 1M views in one hour?!')",
    "📌 Videos of 6 to 15 minutes perform best",
    "📌 Use strong facial expressions and contrasting colors in thumbnails",
    "📌 Adding 3 to 5 hashtags increases exposure",
    "📌 Put the most important content in the first 30 seconds",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct TipsService;

impl TipsService {
    pub fn sample(&self) -> Vec<&'static str> {
        self.sample_with(&mut rand::thread_rng())
    }

    /// Three distinct catalog entries in random order.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&'static str> {
        TIP_CATALOG
            .choose_multiple(rng, TIPS_PER_CALL)
            .copied()
            .collect()
    }
}
