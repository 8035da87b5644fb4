use super::{Cluster, ClusterId};

/// drill-down state of a map. the top-level view is level 1 and every drill
/// into a cluster adds one level. the level is derived from the selection, so
/// a deep level without a selected cluster cannot be expressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    TopLevel,
    DrilledInto { selected: ClusterId },
}

impl ViewState {
    /// clustering level of the markers shown in this state
    pub fn level(&self) -> u32 {
        match self {
            ViewState::TopLevel => 1,
            ViewState::DrilledInto { selected } => selected.level() + 1,
        }
    }

    pub fn selected(&self) -> Option<&ClusterId> {
        match self {
            ViewState::TopLevel => None,
            ViewState::DrilledInto { selected } => Some(selected),
        }
    }

    /// transition taken when the user clicks a marker. clicking an individual
    /// pin does not drill anywhere and leaves the state as it was.
    pub fn drill_into<L>(self, cluster: &Cluster<'_, L>) -> ViewState {
        if cluster.len() < 2 {
            return self;
        }
        ViewState::DrilledInto {
            selected: cluster.id().clone(),
        }
    }

    /// transition taken when the map zoom changes. zooming out past
    /// `reset_zoom` drops any drill-down selection.
    pub fn after_zoom(self, zoom: u8, reset_zoom: u8) -> ViewState {
        match self {
            ViewState::DrilledInto { .. } if zoom < reset_zoom => {
                log::debug!("zoom {zoom} is below reset zoom {reset_zoom}, leaving drill-down");
                ViewState::TopLevel
            }
            other => other,
        }
    }

    pub fn reset(self) -> ViewState {
        ViewState::TopLevel
    }
}
