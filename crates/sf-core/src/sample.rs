//! The demo feed shown when no feed file is supplied.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::author::Author;
use crate::feed::Feed;
use crate::group::{StoryCollection, StoryGroup};
use crate::post::Post;
use crate::story::{Interactions, Story, StoryContent, STORY_LIFETIME_HOURS};

fn avatar(seed: u32) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

fn satoshi() -> Author {
    Author::new("1", "Satoshi.eth", avatar(1))
}

fn crypto_ninja() -> Author {
    Author::new("2", "CryptoNinja", avatar(2))
}

fn web3_builder() -> Author {
    Author::new("3", "Web3Builder", avatar(3))
}

fn story(
    id: &str,
    author: Author,
    text: &str,
    now: DateTime<Utc>,
    interactions: Interactions,
    tags: &[&str],
) -> Story {
    Story {
        id: id.into(),
        content: StoryContent::Text { text: text.into() },
        author,
        created_at: now,
        expires_at: now + Duration::hours(STORY_LIFETIME_HOURS),
        viewed_by: Vec::new(),
        interactions,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        mood: None,
        location: None,
    }
}

fn post(id: &str, author: Author, content: &str, minute_of_day: u32, counts: [u32; 3]) -> Post {
    let created_at = Utc
        .with_ymd_and_hms(2024, 1, 26, minute_of_day / 60, minute_of_day % 60, 0)
        .single()
        .unwrap_or_default();
    Post {
        id: id.into(),
        content: content.into(),
        author,
        created_at,
        likes: counts[0],
        comments: counts[1],
        shares: counts[2],
    }
}

/// The sample story groups, posted at `now`.
pub fn stories(now: DateTime<Utc>) -> StoryCollection {
    let mut first = story(
        "1",
        satoshi(),
        "Working on a new blockchain project! 🚀",
        now,
        Interactions {
            likes: 24,
            comments: 3,
            shares: 5,
        },
        &["blockchain", "development"],
    );
    first.mood = Some("excited".into());

    let second = story(
        "2",
        crypto_ninja(),
        "Check out this new DeFi protocol! 💫",
        now,
        Interactions {
            likes: 18,
            comments: 7,
            shares: 2,
        },
        &["defi", "crypto"],
    );

    StoryCollection::new(vec![
        StoryGroup {
            author: satoshi(),
            stories: vec![first],
            has_unviewed: true,
        },
        StoryGroup {
            author: crypto_ninja(),
            stories: vec![second],
            has_unviewed: true,
        },
    ])
}

/// The sample posts.
pub fn posts() -> Vec<Post> {
    vec![
        post(
            "1",
            satoshi(),
            "Building a decentralized future together! 🚀\nLet's shape the Web3 world! #blockchain #web3 #cryptocurrency",
            10 * 60,
            [42, 12, 8],
        ),
        post(
            "2",
            crypto_ninja(),
            "The potential of blockchain is limitless ✨\nLet's reclaim our data sovereignty! 💪\n#decentralization #privacy #freedom",
            9 * 60 + 30,
            [38, 5, 15],
        ),
        post(
            "3",
            web3_builder(),
            "Designing new protocols... 👩‍💻\nP2P network optimization is key\nTestnet coming soon! Stay tuned!",
            8 * 60 + 45,
            [56, 23, 12],
        ),
    ]
}

/// The complete sample feed with stories posted at `now`.
pub fn feed(now: DateTime<Utc>) -> Feed {
    Feed::new(stories(now), posts())
}
