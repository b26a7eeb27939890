//! Page-lifetime decorative effects. Each installer wires its listeners or
//! observers once at mount and leaks the closures on purpose: the effects
//! live exactly as long as the page view does.

pub mod hover;
pub mod letters;
pub mod reveal;
pub mod scroll;

use web_sys::Document;

/// Install every scroll/hover effect for the current page. Called once from
/// the home page's mount effect.
pub fn install(document: &Document) {
    reveal::install(document);
    scroll::install();
    hover::install(document);
    letters::install(document);
}
