/// Header appearance for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFrame {
    pub hidden: bool,
    pub shadow: bool,
}

/// Hide the header while scrolling down, show it while scrolling up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderScroll {
    last_y: f64,
}

impl HeaderScroll {
    #[must_use]
    pub const fn new(initial_y: f64) -> Self {
        Self { last_y: initial_y }
    }

    pub fn update(&mut self, y: f64) -> HeaderFrame {
        let frame = HeaderFrame {
            hidden: y > self.last_y,
            shadow: y > 0.0,
        };
        self.last_y = y;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_on_scroll_down_and_reveals_on_scroll_up() {
        let mut scroll = HeaderScroll::new(0.0);
        assert_eq!(
            scroll.update(120.0),
            HeaderFrame {
                hidden: true,
                shadow: true
            }
        );
        assert_eq!(
            scroll.update(60.0),
            HeaderFrame {
                hidden: false,
                shadow: true
            }
        );
        assert_eq!(
            scroll.update(0.0),
            HeaderFrame {
                hidden: false,
                shadow: false
            }
        );
    }

    #[test]
    fn unchanged_position_keeps_header_visible() {
        let mut scroll = HeaderScroll::new(40.0);
        assert!(!scroll.update(40.0).hidden);
    }
}
