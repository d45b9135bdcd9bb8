//! Fixed catalog content for the store and wiki listing pages.

use api::{WikiArticle, WikiCategory};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCategory {
    Chests,
    Currency,
    Specials,
}

impl StoreCategory {
    pub const ALL: [StoreCategory; 3] = [
        StoreCategory::Chests,
        StoreCategory::Currency,
        StoreCategory::Specials,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StoreCategory::Chests => "Chests",
            StoreCategory::Currency => "Currency",
            StoreCategory::Specials => "Special Offers",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: u32,
    pub image: &'static str,
    pub category: StoreCategory,
    pub highlight: bool,
}

impl StoreItem {
    pub fn price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

pub const STORE_ITEMS: [StoreItem; 8] = [
    StoreItem {
        id: 1,
        name: "Bronze Chest",
        description: "Contains common items and a small amount of Donarium.",
        price_cents: 499,
        image: "https://vinceregames-441081885.imgix.net/CogreBrnoce.jpg",
        category: StoreCategory::Chests,
        highlight: false,
    },
    StoreItem {
        id: 2,
        name: "Silver Chest",
        description: "Contains uncommon items and a moderate amount of Donarium.",
        price_cents: 999,
        image: "https://vinceregames-441081885.imgix.net/CofrePlata.jpg",
        category: StoreCategory::Chests,
        highlight: false,
    },
    StoreItem {
        id: 3,
        name: "Gold Chest",
        description: "Contains rare items and a substantial amount of Donarium.",
        price_cents: 1999,
        image: "https://vinceregames-441081885.imgix.net/CofreOro.jpg",
        category: StoreCategory::Chests,
        highlight: true,
    },
    StoreItem {
        id: 4,
        name: "100 Donarium",
        description: "A small stack of Donarium coins for basic purchases.",
        price_cents: 499,
        image: "https://vinceregames-441081885.imgix.net/100Moneda.png",
        category: StoreCategory::Currency,
        highlight: false,
    },
    StoreItem {
        id: 5,
        name: "500 Donarium",
        description: "A medium stack of Donarium coins for regular players.",
        price_cents: 1999,
        image: "https://vinceregames-441081885.imgix.net/500Monedas.jpg",
        category: StoreCategory::Currency,
        highlight: false,
    },
    StoreItem {
        id: 6,
        name: "1200 Donarium",
        description: "A large stack of Donarium coins with bonus amount.",
        price_cents: 3999,
        image: "https://vinceregames-441081885.imgix.net/1200Moneda.png",
        category: StoreCategory::Currency,
        highlight: true,
    },
    StoreItem {
        id: 7,
        name: "Starter Bundle",
        description: "Perfect for new players. Includes a Bronze Chest and 200 Donarium.",
        price_cents: 999,
        image: "https://vinceregames-441081885.imgix.net/Cofre200.png",
        category: StoreCategory::Specials,
        highlight: true,
    },
    StoreItem {
        id: 8,
        name: "Premium Bundle",
        description: "Exclusive offer with Gold Chest and 800 Donarium at a discounted price.",
        price_cents: 2999,
        image: "https://vinceregames-441081885.imgix.net/Cofre800.png",
        category: StoreCategory::Specials,
        highlight: true,
    },
];

pub const PURCHASE_UNAVAILABLE: &str = "Purchase functionality is not available yet";

/// Store items in `category`, or all of them for `None`.
pub fn store_items(category: Option<StoreCategory>) -> Vec<&'static StoreItem> {
    STORE_ITEMS
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct WikiEntry {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: WikiCategory,
    pub author: &'static str,
    pub date: &'static str,
}

impl WikiEntry {
    /// The listing entry as a stored article, so its link resolves in local mode.
    pub fn to_article(&self) -> WikiArticle {
        let created_at = NaiveDate::parse_from_str(self.date, "%Y-%m-%d")
            .ok()
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|at| at.and_utc())
            .unwrap_or_default();
        WikiArticle {
            id: self.id.to_string(),
            title: self.title.to_string(),
            content: format!("{}\n\n*By {}*", self.summary, self.author),
            category: self.category,
            author_id: None,
            created_at,
        }
    }
}

pub const WIKI_ENTRIES: [WikiEntry; 6] = [
    WikiEntry {
        id: 1,
        title: "Getting Started with Vincere colors",
        summary: "A beginner's guide to understanding the basic mechanics of the game.",
        category: WikiCategory::Gameplay,
        author: "GameMaster",
        date: "2025-03-15",
    },
    WikiEntry {
        id: 2,
        title: "Military Units Guide",
        summary: "Comprehensive information about all military units, their strengths, \
                  and strategic uses.",
        category: WikiCategory::Units,
        author: "CommanderX",
        date: "2025-03-12",
    },
    WikiEntry {
        id: 3,
        title: "Essential Buildings for Economic Growth",
        summary: "Learn which buildings to prioritize for a strong economy in the early game.",
        category: WikiCategory::Buildings,
        author: "ArchitectPro",
        date: "2025-03-10",
    },
    WikiEntry {
        id: 4,
        title: "Resource Management 101",
        summary: "Tips and tricks for efficient resource gathering and management.",
        category: WikiCategory::Resources,
        author: "ResourceGuru",
        date: "2025-03-08",
    },
    WikiEntry {
        id: 5,
        title: "Roman Influence on Game Design",
        summary: "How ancient Roman culture and military tactics influenced the game design.",
        category: WikiCategory::History,
        author: "HistorianX",
        date: "2025-03-05",
    },
    WikiEntry {
        id: 6,
        title: "Advanced Combat Strategies",
        summary: "Master the battlefield with these expert combat techniques and formations.",
        category: WikiCategory::Strategy,
        author: "BattleMaster",
        date: "2025-03-01",
    },
];

/// Case-insensitive match on title or summary. An empty term matches all.
pub fn search_wiki(term: &str) -> Vec<&'static WikiEntry> {
    let term = term.to_lowercase();
    WIKI_ENTRIES
        .iter()
        .filter(|entry| {
            term.is_empty()
                || entry.title.to_lowercase().contains(&term)
                || entry.summary.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_filter() {
        assert_eq!(store_items(None).len(), 8);
        let chests = store_items(Some(StoreCategory::Chests));
        assert_eq!(chests.len(), 3);
        assert!(chests.iter().all(|i| i.category == StoreCategory::Chests));
        assert_eq!(store_items(Some(StoreCategory::Specials)).len(), 2);
    }

    #[test]
    fn test_price_format() {
        assert_eq!(STORE_ITEMS[0].price(), "$4.99");
        assert_eq!(STORE_ITEMS[5].price(), "$39.99");
    }

    #[test]
    fn test_wiki_search_is_case_insensitive() {
        assert_eq!(search_wiki("").len(), 6);
        let hits = search_wiki("MILITARY");
        let ids: Vec<u32> = hits.iter().map(|e| e.id).collect();
        // title of #2, summary of #5
        assert_eq!(ids, vec![2, 5]);
        assert!(search_wiki("zeppelin").is_empty());
    }

    #[test]
    fn test_entry_as_article() {
        let article = WIKI_ENTRIES[1].to_article();
        assert_eq!(article.id, "2");
        assert_eq!(article.title, "Military Units Guide");
        assert_eq!(article.category, WikiCategory::Units);
        assert!(article.content.ends_with("*By CommanderX*"));
        assert_eq!(article.created_at.format("%d/%m/%Y").to_string(), "12/03/2025");
    }

    #[test]
    fn test_category_label_as_search_term() {
        // Labels rarely occur verbatim in titles, so most category buttons
        // narrow the list to nothing.
        assert!(search_wiki(WikiCategory::Strategy.label()).is_empty());
    }
}
