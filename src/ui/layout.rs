use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    /// ≥96 cols: practice column on the left, word table on the right.
    Wide,
    /// Narrower terminals stack the cards vertically.
    Narrow,
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 96 { LayoutTier::Wide } else { LayoutTier::Narrow }
    }
}

/// Regions of the main screen: header bar, random-word card, practice
/// card, word table, footer hints.
pub struct MainLayout {
    pub header: Rect,
    pub random: Rect,
    pub practice: Rect,
    pub table: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl MainLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(12),
                Constraint::Length(2),
            ])
            .split(area);

        match tier {
            LayoutTier::Wide => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
                    .split(vertical[1]);
                let left = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(7), Constraint::Min(9)])
                    .split(columns[0]);

                Self {
                    header: vertical[0],
                    random: left[0],
                    practice: left[1],
                    table: columns[1],
                    footer: vertical[2],
                    tier,
                }
            }
            LayoutTier::Narrow => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(6),
                        Constraint::Length(10),
                        Constraint::Min(8),
                    ])
                    .split(vertical[1]);

                Self {
                    header: vertical[0],
                    random: rows[0],
                    practice: rows[1],
                    table: rows[2],
                    footer: vertical[2],
                    tier,
                }
            }
        }
    }
}

/// Pack key hints into as few footer lines as fit the width.
pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = "  ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

/// Center a popup, clamped to the containing area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 44;
    const MIN_POPUP_HEIGHT: u16 = 7;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area.x.saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area.y.saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
