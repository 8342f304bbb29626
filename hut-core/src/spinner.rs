//! Drink suggestion spinner.
//!
//! Rows tagged with a `spinner_category` form a second grouping of the feed.
//! Categories whose first row has no subcategory are *direct* (one flat list);
//! the rest are *branching* and need a subcategory before anything is drawn.
use crate::feed::MenuRow;
use crate::lang::Localized;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub const SPIN_DURATION_MS: u32 = 2000;
pub const FADE_DURATION_MS: u32 = 250;

/// Top-level choices offered on the first screen, in display order.
pub const TOP_LEVEL: [&str; 3] = ["coffee", "noncoffee", "snacks"];

/// Sub-options offered for a branching category, in display order.
#[must_use]
pub fn sub_options(category: &str) -> &'static [&'static str] {
    match category {
        "coffee" => &["hot", "iced"],
        "noncoffee" => &["cold", "hot"],
        _ => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerList {
    Direct(Vec<Localized>),
    Branching(Vec<(String, Vec<Localized>)>),
}

/// Spinner categories in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpinnerMenus {
    categories: Vec<(String, SpinnerList)>,
}

impl SpinnerMenus {
    #[must_use]
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a MenuRow>) -> Self {
        let mut menus = Self::default();
        for row in rows {
            let category = row.spinner_category.trim();
            if category.is_empty() {
                continue;
            }
            let sub = row.spinner_subcategory.trim();
            let item = Localized::new(row.item_en.trim(), row.item_ar.trim());

            let slot = match menus.categories.iter().position(|(c, _)| c == category) {
                Some(slot) => slot,
                None => {
                    let list = if sub.is_empty() {
                        SpinnerList::Direct(Vec::new())
                    } else {
                        SpinnerList::Branching(Vec::new())
                    };
                    menus.categories.push((category.to_string(), list));
                    menus.categories.len() - 1
                }
            };

            match &mut menus.categories[slot].1 {
                SpinnerList::Direct(items) => items.push(item),
                SpinnerList::Branching(_) if sub.is_empty() => {
                    log::warn!(
                        "spinner row `{}` has no subcategory in branching category `{category}`; skipped",
                        row.item_en
                    );
                }
                SpinnerList::Branching(subs) => {
                    match subs.iter_mut().find(|(name, _)| name == sub) {
                        Some((_, items)) => items.push(item),
                        None => subs.push((sub.to_string(), vec![item])),
                    }
                }
            }
        }
        menus
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&SpinnerList> {
        self.categories
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, list)| list)
    }

    #[must_use]
    pub fn is_direct(&self, category: &str) -> bool {
        matches!(self.get(category), Some(SpinnerList::Direct(_)))
    }

    /// Items to draw from. Direct categories take no subcategory, branching
    /// ones require one; any mismatch yields an empty list.
    #[must_use]
    pub fn items(&self, category: &str, sub: Option<&str>) -> &[Localized] {
        match (self.get(category), sub) {
            (Some(SpinnerList::Direct(items)), None) => items,
            (Some(SpinnerList::Branching(subs)), Some(sub)) => subs
                .iter()
                .find(|(name, _)| name == sub)
                .map_or(&[], |(_, items)| items.as_slice()),
            _ => &[],
        }
    }

    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|(c, _)| c.as_str()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpinnerView {
    #[default]
    Initial,
    SubOptions {
        category: String,
    },
    Suggestion {
        category: String,
        subcategory: Option<String>,
    },
    /// Nothing to draw for the chosen list.
    Empty {
        category: String,
        subcategory: Option<String>,
    },
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Spin,
    Fade,
}

impl Animation {
    #[must_use]
    pub const fn duration_ms(self) -> u32 {
        match self {
            Self::Spin => SPIN_DURATION_MS,
            Self::Fade => FADE_DURATION_MS,
        }
    }
}

/// How the page should animate into the new view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub animation: Animation,
    pub confetti: bool,
}

impl Transition {
    const SPIN: Self = Self {
        animation: Animation::Spin,
        confetti: false,
    };
    const FADE: Self = Self {
        animation: Animation::Fade,
        confetti: false,
    };
    const DRAW: Self = Self {
        animation: Animation::Spin,
        confetti: true,
    };

    #[must_use]
    pub const fn duration_ms(self) -> u32 {
        self.animation.duration_ms()
    }
}

/// Spinner state machine. Held in memory only.
#[derive(Debug, Clone)]
pub struct SpinnerGame {
    menus: SpinnerMenus,
    view: SpinnerView,
    selected: Option<Localized>,
    rng: ChaCha20Rng,
}

impl SpinnerGame {
    #[must_use]
    pub fn new(menus: SpinnerMenus, seed: u64) -> Self {
        Self {
            menus,
            view: SpinnerView::Initial,
            selected: None,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub const fn view(&self) -> &SpinnerView {
        &self.view
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Localized> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn menus(&self) -> &SpinnerMenus {
        &self.menus
    }

    pub fn select_category(&mut self, category: &str) -> Transition {
        if self.menus.is_direct(category) {
            return self.suggest(category, None);
        }
        if self.menus.get(category).is_none() && sub_options(category).is_empty() {
            return self.show_empty(category, None);
        }
        self.view = SpinnerView::SubOptions {
            category: category.to_string(),
        };
        Transition::SPIN
    }

    /// Draw a random item. Can be called again from the suggestion to re-spin.
    pub fn suggest(&mut self, category: &str, subcategory: Option<&str>) -> Transition {
        let subcategory = subcategory.filter(|s| !s.is_empty());
        let items = self.menus.items(category, subcategory);
        if items.is_empty() {
            return self.show_empty(category, subcategory);
        }
        let pick = items[self.rng.gen_range(0..items.len())].clone();
        log::debug!("spinner drew `{}` from {category}/{subcategory:?}", pick.en);
        self.selected = Some(pick);
        self.view = SpinnerView::Suggestion {
            category: category.to_string(),
            subcategory: subcategory.map(str::to_string),
        };
        Transition::DRAW
    }

    /// Accept the current suggestion. Does nothing unless one is showing.
    pub fn accept(&mut self) -> Option<Transition> {
        if !matches!(self.view, SpinnerView::Suggestion { .. }) || self.selected.is_none() {
            return None;
        }
        self.view = SpinnerView::Accepted;
        Some(Transition::FADE)
    }

    pub fn reset(&mut self) -> Transition {
        self.view = SpinnerView::Initial;
        self.selected = None;
        Transition::FADE
    }

    fn show_empty(&mut self, category: &str, subcategory: Option<&str>) -> Transition {
        self.selected = None;
        self.view = SpinnerView::Empty {
            category: category.to_string(),
            subcategory: subcategory.map(str::to_string),
        };
        Transition::FADE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(item: &str, cat: &str, sub: &str) -> MenuRow {
        MenuRow {
            item_en: item.into(),
            item_ar: format!("{item}-ar"),
            spinner_category: cat.into(),
            spinner_subcategory: sub.into(),
            ..MenuRow::default()
        }
    }

    fn menus() -> SpinnerMenus {
        let rows = vec![
            row("Latte", "coffee", "hot"),
            row("Cold Brew", "coffee", "iced"),
            row("Iced Mocha", "coffee", "iced"),
            row("Lemonade", "noncoffee", "cold"),
            row("Brownie", "snacks", ""),
            row("Cookie", "snacks", "sweet"),
            row("Stray", "coffee", ""),
            row("Untagged", "", ""),
        ];
        SpinnerMenus::from_rows(&rows)
    }

    #[test]
    fn grouping_follows_first_row_shape() {
        let menus = menus();
        assert_eq!(menus.categories(), vec!["coffee", "noncoffee", "snacks"]);
        assert!(menus.is_direct("snacks"));
        assert_eq!(menus.items("snacks", None).len(), 2);
        assert_eq!(menus.items("coffee", Some("iced")).len(), 2);
        assert!(menus.items("coffee", None).is_empty());
        assert!(menus.items("noncoffee", Some("hot")).is_empty());
    }

    #[test]
    fn direct_category_suggests_immediately() {
        let mut game = SpinnerGame::new(menus(), 7);
        let transition = game.select_category("snacks");
        assert_eq!(transition.animation, Animation::Spin);
        assert!(transition.confetti);
        assert!(matches!(game.view(), SpinnerView::Suggestion { subcategory: None, .. }));
        let picked = game.selected().unwrap();
        assert!(["Brownie", "Cookie"].contains(&picked.en.as_str()));
    }

    #[test]
    fn branching_category_needs_a_subcategory() {
        let mut game = SpinnerGame::new(menus(), 7);
        let transition = game.select_category("coffee");
        assert!(!transition.confetti);
        assert_eq!(
            game.view(),
            &SpinnerView::SubOptions {
                category: "coffee".into()
            }
        );
        assert!(game.selected().is_none());

        for _ in 0..20 {
            game.suggest("coffee", Some("iced"));
            let picked = &game.selected().unwrap().en;
            assert!(picked == "Cold Brew" || picked == "Iced Mocha");
        }
    }

    #[test]
    fn empty_lists_offer_start_over() {
        let mut game = SpinnerGame::new(menus(), 1);
        let transition = game.suggest("noncoffee", Some("hot"));
        assert_eq!(transition.duration_ms(), FADE_DURATION_MS);
        assert!(matches!(game.view(), SpinnerView::Empty { .. }));
        assert_eq!(game.accept(), None);
        game.reset();
        assert_eq!(game.view(), &SpinnerView::Initial);

        let mut empty = SpinnerGame::new(SpinnerMenus::default(), 1);
        empty.select_category("coffee");
        assert!(matches!(empty.view(), SpinnerView::SubOptions { .. }));
        empty.select_category("snacks");
        assert!(matches!(empty.view(), SpinnerView::Empty { .. }));
    }

    #[test]
    fn accept_keeps_selected_item() {
        let mut game = SpinnerGame::new(menus(), 3);
        game.suggest("coffee", Some("hot"));
        let transition = game.accept().unwrap();
        assert_eq!(transition.animation, Animation::Fade);
        assert_eq!(game.view(), &SpinnerView::Accepted);
        assert_eq!(game.selected().unwrap().en, "Latte");
        assert_eq!(sub_options("noncoffee"), &["cold", "hot"]);
    }

    #[test]
    fn same_seed_draws_same_sequence() {
        let draw = |seed| {
            let mut game = SpinnerGame::new(menus(), seed);
            (0..8)
                .map(|_| {
                    game.suggest("coffee", Some("iced"));
                    game.selected().unwrap().en.clone()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }
}
