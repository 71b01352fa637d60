use crate::config::settings::DEFAULT_CHILD_MARKER;
use crate::modules::reservation::model::{Category, Quota, Reservation, TimeOfDay};

#[derive(Debug, Clone)]
pub struct Selector {
    marker: String,
}

impl Selector {
    pub fn new(marker: impl AsRef<str>) -> Self {
        Self {
            marker: marker.as_ref().to_lowercase(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn category(&self, reservation: &Reservation) -> Category {
        if reservation.description.to_lowercase().contains(&self.marker) {
            Category::Child
        } else {
            Category::Adult
        }
    }

    // Stable sort: ties keep retrieval order
    pub fn select<'a>(&self, candidates: &'a [Reservation], target: TimeOfDay, quota: Quota) -> SelectOutcome<'a> {
        if candidates.is_empty() {
            return SelectOutcome::NoCandidates;
        }

        let mut ordered: Vec<&Reservation> = candidates.iter().collect();
        ordered.sort_by_cached_key(|r| r.time_of_day().distance(target));

        let mut selection = Selection::default();
        for reservation in ordered {
            if selection.is_filled(quota) {
                break;
            }

            let category = self.category(reservation);
            if selection.count(category) < quota.of(category) {
                selection.accept(reservation, category);
            }
        }

        SelectOutcome::Selected(selection)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(DEFAULT_CHILD_MARKER)
    }
}

pub fn select(candidates: &[Reservation], target: TimeOfDay, want_adults: u32, want_children: u32) -> SelectOutcome<'_> {
    Selector::default().select(candidates, target, Quota::new(want_adults, want_children))
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome<'a> {
    NoCandidates,
    Selected(Selection<'a>),
}

impl<'a> SelectOutcome<'a> {
    pub fn into_selection(self) -> Selection<'a> {
        match self {
            SelectOutcome::NoCandidates => Selection::default(),
            SelectOutcome::Selected(selection) => selection,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection<'a> {
    picked: Vec<(&'a Reservation, Category)>,
    adults: u32,
    children: u32,
}

impl<'a> Selection<'a> {
    fn accept(&mut self, reservation: &'a Reservation, category: Category) {
        match category {
            Category::Adult => self.adults += 1,
            Category::Child => self.children += 1,
        }
        self.picked.push((reservation, category));
    }

    fn is_filled(&self, quota: Quota) -> bool {
        self.adults >= quota.adults && self.children >= quota.children
    }

    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Adult => self.adults,
            Category::Child => self.children,
        }
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn reservations(&self) -> impl Iterator<Item = &'a Reservation> + '_ {
        self.picked.iter().map(|&(r, _)| r)
    }

    pub fn entries(&self) -> &[(&'a Reservation, Category)] {
        &self.picked
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.picked.iter().map(|&(r, _)| r.id.as_str()).collect()
    }

    pub fn shortfall(&self, quota: Quota) -> Quota {
        Quota::new(
            quota.adults.saturating_sub(self.adults),
            quota.children.saturating_sub(self.children),
        )
    }
}
