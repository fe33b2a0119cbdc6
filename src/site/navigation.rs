//! Scroll-linked navigation highlighting: a pure function from the measured
//! section geometry and the scroll position to the section id that should be
//! lit in the nav bar. The shell re-runs it on every scroll event.

/// Anchor ids of the page sections, in page order
pub const SECTION_IDS: [&str; 8] = [
    "home",
    "about",
    "skills",
    "projects",
    "certificates",
    "education",
    "experience",
    "contact",
];

/// The highlight probe sits this far below the top of the viewport, so a
/// section lights up slightly before its heading reaches the top edge
pub const SCROLL_PROBE_OFFSET: u32 = 100;

/// Geometry of one rendered section, as measured by the shell
#[derive(Clone, Copy, Debug)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: u32,
    pub height: u32,
}

/// The section whose `[top, top + height)` range contains the probe; `None`
/// above the first section (sections are disjoint, so at most one matches)
pub fn active_section(
    sections: &[SectionBounds],
    scroll_y: u32,
) -> Option<&'static str> {
    let probe = scroll_y + SCROLL_PROBE_OFFSET;
    sections
        .iter()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id)
}
