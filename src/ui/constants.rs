use ratatui::layout::Margin;

// Screen layout
pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;
pub const SIDEBAR_WIDTH: u16 = 28;
pub const DROPDOWN_WIDTH: u16 = 64;
pub const PANEL_MARGIN: Margin = Margin {
    horizontal: 1,
    vertical: 1,
};

pub const CURSOR_INDICATOR: char = '▌';
pub const SEARCH_PROMPT: &str = "Search: ";
pub const SEARCH_HINT: &str = "Press / to search tools and categories";
pub const APP_TITLE: &str = " OSINT Map ";

// Node box corners and sides
pub mod node_box {
    pub const TOP_LEFT: char = '╭';
    pub const TOP_RIGHT: char = '╮';
    pub const BOTTOM_LEFT: char = '╰';
    pub const BOTTOM_RIGHT: char = '╯';
    pub const HORIZONTAL: char = '─';
    pub const VERTICAL: char = '│';
    pub const EXPANDED: char = '▾';
    pub const COLLAPSED: char = '▸';
}

// Edge direction bits, combined per cell
pub mod junction {
    pub const UP: u8 = 1;
    pub const DOWN: u8 = 2;
    pub const LEFT: u8 = 4;
    pub const RIGHT: u8 = 8;
    pub const ARROW_HEAD: char = '▶';

    pub fn glyph(mask: u8) -> char {
        match mask {
            m if m == UP | DOWN => '│',
            m if m == RIGHT | DOWN => '╭',
            m if m == RIGHT | UP => '╰',
            m if m == LEFT | DOWN => '╮',
            m if m == LEFT | UP => '╯',
            m if m == LEFT | RIGHT | DOWN => '┬',
            m if m == LEFT | RIGHT | UP => '┴',
            m if m == UP | DOWN | RIGHT => '├',
            m if m == UP | DOWN | LEFT => '┤',
            m if m == UP | DOWN | LEFT | RIGHT => '┼',
            m if m == UP || m == DOWN => '│',
            _ => '─',
        }
    }
}
