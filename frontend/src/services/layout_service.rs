use leptos::prelude::*;

/// Text direction applied to `<body dir>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Rtl,
    Ltr,
}

impl Direction {
    /// Parse a config value. Anything other than "ltr" is right-to-left.
    pub fn from_config(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("ltr") {
            Direction::Ltr
        } else {
            Direction::Rtl
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Rtl => Direction::Ltr,
            Direction::Ltr => Direction::Rtl,
        }
    }
}

#[derive(Clone, Copy)]
pub struct LayoutState {
    pub direction: RwSignal<Direction>,
}

impl LayoutState {
    pub fn new(initial: Direction) -> Self {
        Self {
            direction: RwSignal::new(initial),
        }
    }

    pub fn toggle_direction(&self) {
        self.direction.update(|d| *d = d.flipped());
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

pub fn provide_layout_state(initial: Direction) {
    provide_context(LayoutState::new(initial));
}

pub fn use_layout_state() -> LayoutState {
    expect_context::<LayoutState>()
}
