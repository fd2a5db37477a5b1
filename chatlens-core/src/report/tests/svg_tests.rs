use crate::conf::types::WordCloudConfig;
use crate::report::render_svg;
use crate::stats::layout_word_cloud;

#[test]
fn svg_has_canvas_and_one_text_per_word() {
    // Arrange
    let ranked = vec![("hello".to_string(), 3), ("world".to_string(), 1)];
    let cloud = layout_word_cloud(&ranked, &WordCloudConfig::default());

    // Act
    let svg = render_svg(&cloud);

    // Assert
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"500\" height=\"500\""));
    assert!(svg.contains("fill=\"white\""));
    assert_eq!(svg.matches("<text ").count(), 2);
    assert!(svg.contains(">hello</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_escapes_markup_in_words() {
    let ranked = vec![("<b>&\"x\"".to_string(), 1)];
    let cloud = layout_word_cloud(&ranked, &WordCloudConfig::default());

    let svg = render_svg(&cloud);

    assert!(svg.contains(">&lt;b&gt;&amp;&quot;x&quot;</text>"));
    assert!(!svg.contains("<b>"));
}

#[test]
fn empty_cloud_is_still_a_document() {
    let cloud = layout_word_cloud(&[], &WordCloudConfig::default());

    let svg = render_svg(&cloud);

    assert!(svg.contains("<rect"));
    assert!(!svg.contains("<text"));
}
