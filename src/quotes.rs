//! The compiled-in quote collection and random selection over it.

use std::time::{SystemTime, UNIX_EPOCH};

/// Attribution shown under every quote
pub const AUTHOR: &str = "- Naval Ravikant";

const NAVAL_QUOTES: &[&str] = &[
    "Seek wealth, not money or status. Wealth is having assets that earn while you sleep.",
    "You're not going to get rich renting out your time. You must own equity to gain your financial freedom.",
    "Learn to sell. Learn to build. If you can do both, you will be unstoppable.",
    "Arm yourself with specific knowledge, accountability, and leverage.",
    "Specific knowledge is knowledge that you cannot be trained for.",
    "Play iterated games. All the returns in life come from compound interest.",
    "Pick business partners with high intelligence, energy, and, above all, integrity.",
    "Don't partner with cynics and pessimists. Their beliefs are self-fulfilling.",
    "Learn to love to read. Reading is the ultimate meta-skill.",
    "The most important skill for getting rich is becoming a perpetual learner.",
    "Embrace accountability, and take business risks under your own name.",
    "There are no get rich quick schemes. That's just someone else getting rich off you.",
    "You will get rich by giving society what it wants but does not yet know how to get.",
    "If you secretly despise wealth, it will elude you.",
    "Ignore people playing status games. They gain status by attacking people playing wealth creation games.",
    "You're not going to get rich renting out your time.",
    "Code and media are permissionless leverage.",
    "Most of life is a search for who and what needs you the most.",
    "The Internet has massively broadened the possible space of careers.",
    "Escape competition through authenticity.",
    "Doing one thing better than anyone else is the key to wealth.",
    "Apply specific knowledge, with leverage, and eventually you will get what you deserve.",
    "When you're finally wealthy, you'll realize that it wasn't what you were seeking in the first place.",
    "Earn with your mind, not your time.",
    "Become the best in the world at what you do. Keep redefining what you do until this is true.",
    "School, politics, sports, and games train us to compete against others. True rewards come from competing against yourself.",
    "The most interesting people are the ones who don't fit into your average box.",
    "Happiness is a choice and a skill and you can dedicate yourself to learning that skill.",
    "Desire is a contract that you make with yourself to be unhappy until you get what you want.",
    "Happiness is being present and not thinking about the past or future.",
    "Peace is happiness at rest. Happiness is peace in motion.",
    "The three big ones in life are wealth, health, and happiness. We pursue them in that order, but their importance is reverse.",
    "All the real benefits in life come from compound interest.",
    "Play long-term games with long-term people.",
    "Life is a single-player game.",
    "Jealousy is a pointless emotion.",
    "You can't be normal and expect abnormal returns.",
    "Reading is faster than listening. Doing is faster than watching.",
    "Busy is the death of productivity.",
    "The modern mind is overstimulated and the modern body is understimulated.",
    "Art is creativity. Art is anything done for its own sake.",
    "Money is how we transfer time and wealth. Money is social credits.",
    "You make your own luck if you stay at it long enough.",
    "Karma is just you, repeating your patterns, virtues, and flaws until you finally get what you deserve.",
    "Doctors won't make you healthy. Teachers won't make you smart. Gurus won't make you calm. You have to do it yourself.",
    "A fit body, a calm mind, a house full of love. These things cannot be bought—they must be earned.",
    "Technology is the application of knowledge to control the natural world.",
    "Retirement is when you stop sacrificing today for an imaginary tomorrow.",
    "If you can't see yourself working with someone for life, don't work with them for a day.",
    "Reading a book isn't a race – the better the book, the slower it should be absorbed.",
];

/// An attributed quote, built from the store when it is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    pub fn new(text: &'static str, author: &'static str) -> Self {
        Self { text, author }
    }

    fn attributed(text: &'static str) -> Self {
        Self::new(text, AUTHOR)
    }
}

/// Fixed quote collection plus the generator used to pick from it.
///
/// The generator is owned by the store rather than shared process state, so a
/// seeded store replays the same selections.
pub struct QuoteStore {
    quotes: &'static [&'static str],
    rng: fastrand::Rng,
}

impl QuoteStore {
    /// Store seeded from the current time
    pub fn new() -> Self {
        Self::with_seed(time_seed())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    pub fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            quotes: NAVAL_QUOTES,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Stored quote texts in store order
    pub fn texts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.quotes.iter().copied()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.quotes.iter().any(|q| *q == text)
    }

    /// Uniformly pick one quote
    pub fn get_random(&mut self) -> Quote {
        let index = self.rng.usize(..self.quotes.len());
        Quote::attributed(self.quotes[index])
    }

    /// Pick up to `count` distinct quotes, in selection order.
    ///
    /// `count` is clamped to the store size. Sampling is a partial
    /// Fisher-Yates shuffle over the indices, so it always terminates after
    /// exactly `count` draws.
    pub fn get_multiple(&mut self, count: usize) -> Vec<Quote> {
        let count = count.min(self.quotes.len());
        let mut indices: Vec<usize> = (0..self.quotes.len()).collect();

        for i in 0..count {
            let j = self.rng.usize(i..indices.len());
            indices.swap(i, j);
        }

        indices[..count]
            .iter()
            .map(|&index| Quote::attributed(self.quotes[index]))
            .collect()
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
