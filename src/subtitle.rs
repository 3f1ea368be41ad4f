//! Section subtitle text

/// Subtitles for known section titles. Unknown titles map to "".
const SUBTITLES: &[(&str, &str)] = &[
    ("Getting Started", ""),
    (
        "Main Concepts",
        "Establish a firm foundation by learning fundamental OrderCloud concepts",
    ),
    (
        "Features",
        "Explore at a high-level some of the features you can use to solve your complex B2B scenarios",
    ),
    (
        "Guides",
        "Hands-on guides for some of the most common scenarios you'll encounter in the OrderCloud API",
    ),
];

/// Returns the subtitle shown under a section card heading
pub fn subtitle_for(title: &str) -> &'static str {
    SUBTITLES
        .iter()
        .find(|(known, _)| *known == title)
        .map_or("", |(_, subtitle)| *subtitle)
}
