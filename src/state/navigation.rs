/// Screen navigation
///
/// The `Navigator` owns the catalog and the current view and is the only
/// thing allowed to change either. The UI sends it intents and reads back
/// the resulting view.
///
/// ```text
///            show_essay            enter (catalog non-empty)
///   Essay <------------- Welcome -------------------------> Gallery
///     |      back          ^                                 |   ^
///     +--------------------+                       select(i) |   | back
///                          |                                 v   |
///                          +------ menu (from anywhere) --- Detail(i)
///                                                          prev/next
/// ```

use super::catalog::Catalog;
use super::data::ArtifactRecord;

/// Number of posters the gallery shows. There is only the one page.
pub const GALLERY_PAGE_SIZE: usize = 24;
/// Gallery grid width (4 rows of 6)
pub const GALLERY_COLUMNS: usize = 6;

/// The full-screen display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Welcome,
    Essay,
    Gallery,
    /// Detail for the poster at this catalog index
    Detail(usize),
}

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Enter,
    ShowEssay,
    Select(usize),
    Next,
    Prev,
    Back,
    Menu,
}

/// Outcome of applying an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed { from: View, to: View },
    Unchanged,
}

impl Transition {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    catalog: Catalog,
    view: View,
}

impl Navigator {
    /// Start on the welcome screen
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            view: View::Welcome,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The poster on screen, only ever `Some` in `Detail`
    pub fn current(&self) -> Option<&ArtifactRecord> {
        match self.view {
            View::Detail(index) => self.catalog.get(index),
            _ => None,
        }
    }

    /// Posters shown in the gallery grid
    pub fn gallery(&self) -> &[ArtifactRecord] {
        self.catalog.page(GALLERY_PAGE_SIZE)
    }

    /// Apply one intent. Anything that doesn't make sense from the current
    /// view, or points outside the catalog, leaves the view alone.
    pub fn apply(&mut self, intent: Intent) -> Transition {
        let len = self.catalog.len();

        let next = match (self.view, intent) {
            (_, Intent::Menu) => Some(View::Welcome),

            (View::Welcome, Intent::ShowEssay) => Some(View::Essay),
            (View::Welcome, Intent::Enter) if len > 0 => Some(View::Gallery),
            (View::Essay, Intent::Back) => Some(View::Welcome),

            (View::Gallery, Intent::Select(index)) if index < len => Some(View::Detail(index)),

            (View::Detail(_), Intent::Back) => Some(View::Gallery),
            (View::Detail(index), Intent::Next) if index + 1 < len => {
                Some(View::Detail(index + 1))
            }
            (View::Detail(index), Intent::Prev) if index > 0 => Some(View::Detail(index - 1)),

            _ => None,
        };

        match next {
            Some(to) if to != self.view => {
                let from = std::mem::replace(&mut self.view, to);
                tracing::debug!("🧭 {:?} --{:?}--> {:?}", from, intent, to);
                Transition::Changed { from, to }
            }
            _ => Transition::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(count: usize) -> Catalog {
        Catalog::new(
            (0..count)
                .map(|i| ArtifactRecord {
                    id: i as i64 + 1,
                    title: format!("Poster {}", i + 1),
                    image_path: format!("posters/{}.jpg", i + 1),
                    explanation: String::new(),
                    designer: None,
                    year: None,
                })
                .collect(),
        )
    }

    fn at(count: usize, view: View) -> Navigator {
        Navigator {
            catalog: catalog(count),
            view,
        }
    }

    #[test]
    fn test_starts_on_welcome() {
        let nav = Navigator::new(catalog(3));

        assert_eq!(nav.view(), View::Welcome);
        assert!(nav.current().is_none());
    }

    #[test]
    fn test_essay_round_trip() {
        let mut nav = Navigator::new(catalog(3));

        assert!(nav.apply(Intent::ShowEssay).is_changed());
        assert_eq!(nav.view(), View::Essay);
        assert!(nav.apply(Intent::Back).is_changed());
        assert_eq!(nav.view(), View::Welcome);
    }

    #[test]
    fn test_enter_needs_posters() {
        let mut empty = Navigator::new(Catalog::default());
        assert_eq!(empty.apply(Intent::Enter), Transition::Unchanged);
        assert_eq!(empty.view(), View::Welcome);

        let mut nav = Navigator::new(catalog(1));
        assert_eq!(
            nav.apply(Intent::Enter),
            Transition::Changed {
                from: View::Welcome,
                to: View::Gallery
            }
        );
    }

    #[test]
    fn test_select_bounds() {
        let mut nav = at(3, View::Gallery);
        assert_eq!(nav.apply(Intent::Select(3)), Transition::Unchanged);
        assert_eq!(nav.view(), View::Gallery);

        assert!(nav.apply(Intent::Select(2)).is_changed());
        assert_eq!(nav.view(), View::Detail(2));
        assert_eq!(nav.current().unwrap().id, 3);
    }

    #[test]
    fn test_select_beyond_first_page() {
        let mut nav = at(30, View::Gallery);

        assert_eq!(nav.gallery().len(), GALLERY_PAGE_SIZE);
        assert!(nav.apply(Intent::Select(27)).is_changed());
        assert_eq!(nav.view(), View::Detail(27));
    }

    #[test]
    fn test_prev_next_stop_at_ends() {
        let mut nav = at(3, View::Detail(0));
        assert_eq!(nav.apply(Intent::Prev), Transition::Unchanged);
        assert_eq!(nav.view(), View::Detail(0));

        let mut nav = at(3, View::Detail(2));
        assert_eq!(nav.apply(Intent::Next), Transition::Unchanged);
        assert_eq!(nav.view(), View::Detail(2));

        assert!(nav.apply(Intent::Prev).is_changed());
        assert_eq!(nav.view(), View::Detail(1));
    }

    #[test]
    fn test_intents_ignored_in_wrong_view() {
        let mut nav = at(3, View::Welcome);
        for intent in [Intent::Next, Intent::Prev, Intent::Back, Intent::Select(0)] {
            assert_eq!(nav.apply(intent), Transition::Unchanged);
        }

        let mut nav = at(3, View::Gallery);
        assert_eq!(nav.apply(Intent::Enter), Transition::Unchanged);
        assert_eq!(nav.apply(Intent::ShowEssay), Transition::Unchanged);
    }

    #[test]
    fn test_menu_from_everywhere() {
        for view in [View::Welcome, View::Essay, View::Gallery, View::Detail(1)] {
            let mut nav = at(3, view);
            nav.apply(Intent::Menu);
            assert_eq!(nav.view(), View::Welcome);
            assert!(nav.current().is_none());
        }
    }

    #[test]
    fn test_menu_on_welcome_is_unchanged() {
        let mut nav = at(3, View::Welcome);

        assert_eq!(nav.apply(Intent::Menu), Transition::Unchanged);
    }
}
