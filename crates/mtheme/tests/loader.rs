mod common;

use common::{load, options, theme_document};
use mtheme::{
    ButtonState, ButtonType, DrawOp, ErrorKind, FrameFocus, FramePiece, FrameResize, FrameState,
    FrameType, GtkState, LoadOptions, MemoryImageLoader, MenuIconType, Pixbuf, RgbaColor,
    TextureSpec, ThemeError, load_theme, parse_theme,
};
use posexpr::{ExprError, Number};

fn message(err: &ThemeError) -> String {
    err.innermost().to_string()
}

// ============================================================================
// Complete themes
// ============================================================================

#[test]
fn loads_fixture_theme() {
    let theme = load("", "", "").unwrap();

    assert_eq!(theme.name, "Test");
    assert_eq!(theme.info.readable_name.as_deref(), Some("Test"));
    assert_eq!(theme.info.author.as_deref(), Some("A. Person"));
    assert_eq!(theme.info.description.as_deref(), Some("Fixture theme"));
    assert_eq!(theme.constant("ButtonPad"), Some(Number::Int(2)));
    assert_eq!(theme.constant("Ratio"), Some(Number::Double(0.5)));

    let layout = theme.layout(theme.lookup_layout("normal").unwrap());
    assert_eq!(layout.left_width, 6);
    assert_eq!(layout.button_width, 18);
    assert_eq!(layout.title_border.top, 3);
    assert_eq!(layout.button_border.bottom, 2);
    assert!(layout.has_title);
    assert_eq!(layout.title_scale, 1.0);

    let style = theme
        .frame_style(
            FrameType::Normal,
            FrameState::Normal,
            FrameResize::Both,
            FrameFocus::Yes,
        )
        .unwrap();
    assert_eq!(Some(style), theme.lookup_style("normal"));
    assert!(
        theme
            .resolve_button(style, ButtonType::Close, ButtonState::Prelight)
            .is_some()
    );
}

#[test]
fn constants_are_folded_into_expressions() {
    let theme = load("", "", "").unwrap();
    let list = theme.draw_op_list(theme.lookup_draw_op_list("button").unwrap());
    let DrawOp::Rectangle { rect, .. } = &list.ops()[0] else {
        panic!("expected a rectangle, got {:?}", list.ops()[0]);
    };
    assert_eq!(rect.x.source(), "2");
    assert_eq!(rect.width.source(), "width - 2 * 2");
}

#[test]
fn other_window_types_use_the_normal_set() {
    let theme = load("", "", "").unwrap();
    assert_eq!(
        theme.style_set_for_type(FrameType::Dialog),
        theme.lookup_style_set("normal")
    );
}

#[test]
fn style_set_slot_falls_back_to_parent() {
    let extra = r##"
  <frame_style name="other" parent="normal"/>
  <frame_style_set name="child" parent="normal">
    <frame focus="yes" state="normal" resize="both" style="other"/>
  </frame_style_set>"##;
    let theme = load("", "", extra).unwrap();
    let child = theme.lookup_style_set("child").unwrap();

    assert_eq!(
        theme.resolve_style(child, FrameState::Normal, FrameResize::Both, FrameFocus::Yes),
        theme.lookup_style("other")
    );
    assert_eq!(
        theme.resolve_style(child, FrameState::Shaded, FrameResize::None, FrameFocus::No),
        theme.lookup_style("normal")
    );
}

#[test]
fn inline_and_named_pieces() {
    let draw_ops = r##"
  <draw_ops name="bg">
    <rectangle color="#000000" x="0" y="0" width="width" height="height" filled="true"/>
  </draw_ops>"##;
    let pieces = r##"
    <piece position="entire_background" draw_ops="bg"/>
    <piece position="title">
      <draw_ops>
        <title color="gtk:text[SELECTED]" x="2" y="(height - title_height) / 2"/>
      </draw_ops>
    </piece>"##;
    let theme = load(draw_ops, pieces, "").unwrap();
    let style = theme.lookup_style("normal").unwrap();

    assert_eq!(
        theme.resolve_piece(style, FramePiece::EntireBackground),
        Some(&TextureSpec::ShapeList(theme.lookup_draw_op_list("bg").unwrap()))
    );
    let Some(TextureSpec::ShapeList(title)) = theme.resolve_piece(style, FramePiece::Title)
    else {
        panic!("title piece should be a shape list");
    };
    assert_eq!(theme.draw_op_list(*title).ops()[0].name(), "title");
    assert_eq!(theme.resolve_piece(style, FramePiece::Overlay), None);
}

#[test]
fn gradients_collect_their_stops() {
    let draw_ops = r##"
  <draw_ops name="grad">
    <gradient type="diagonal" x="0" y="0" width="width" height="height" alpha="0.5">
      <color value="#ff0000"/>
      <color value="blend/#000000/#ffffff/0.5"/>
      <color value="gtk:bg[PRELIGHT]"/>
    </gradient>
  </draw_ops>"##;
    let theme = load(draw_ops, "", "").unwrap();
    let list = theme.draw_op_list(theme.lookup_draw_op_list("grad").unwrap());
    assert_eq!(list.len(), 1);
    let DrawOp::Gradient { spec, alpha, .. } = &list.ops()[0] else {
        panic!("expected a gradient");
    };
    assert_eq!(spec.color_specs.len(), 3);
    assert_eq!(*alpha, 0.5);
}

#[test]
fn menu_icons_are_assigned_once() {
    let extra = r##"
  <menu_icon function="close" state="normal" draw_ops="button"/>
  <menu_icon function="minimize" state="prelight">
    <draw_ops>
      <line color="#000000" x1="0" y1="height / 2" x2="width" y2="height / 2" width="2"/>
    </draw_ops>
  </menu_icon>"##;
    let theme = load("", "", extra).unwrap();
    assert_eq!(
        theme.menu_icon(MenuIconType::Close, GtkState::Normal),
        theme.lookup_draw_op_list("button")
    );
    assert!(
        theme
            .menu_icon(MenuIconType::Minimize, GtkState::Prelight)
            .is_some()
    );
    assert!(theme.menu_icon(MenuIconType::Maximize, GtkState::Normal).is_none());

    let extra = r##"
  <menu_icon function="close" state="normal" draw_ops="button"/>
  <menu_icon function="close" state="normal" draw_ops="button"/>"##;
    let err = load("", "", extra).unwrap_err();
    assert_eq!(
        message(&err),
        "Theme already has a menu icon for function close state normal"
    );
}

#[test]
fn image_ops_share_loaded_images() {
    let draw_ops = r##"
  <draw_ops name="images">
    <image filename="close.png" x="(width - object_width) / 2" y="0" width="object_width" height="object_height" colorize="gtk:fg[NORMAL]"/>
    <image filename="close.png" x="0" y="0" width="width" height="height" alpha="0.25"/>
  </draw_ops>"##;
    let loader = MemoryImageLoader::new().with_image(
        "./close.png",
        Pixbuf::filled(4, 4, RgbaColor::rgb(200, 0, 0)),
    );
    let options = options().with_image_loader(loader);
    let theme = parse_theme(&theme_document(draw_ops, "", ""), &options).unwrap();

    let ops = theme
        .draw_op_list(theme.lookup_draw_op_list("images").unwrap())
        .ops();
    let (DrawOp::Image { pixbuf: a, .. }, DrawOp::Image { pixbuf: b, alpha, .. }) =
        (&ops[0], &ops[1])
    else {
        panic!("expected two image ops");
    };
    assert!(std::rc::Rc::ptr_eq(a, b));
    assert_eq!(a.width(), 4);
    assert_eq!(*alpha, 0.25);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn duplicate_names_are_rejected() {
    let cases = [
        (
            r##"<frame_geometry name="normal"><distance name="button_width" value="1"/></frame_geometry>"##,
            "<frame_geometry> name \"normal\" used a second time",
        ),
        (
            r##"<draw_ops name="button"/>"##,
            "<draw_ops> name \"button\" used a second time",
        ),
        (
            r##"<frame_style name="normal" geometry="normal"/>"##,
            "<frame_style> name \"normal\" used a second time",
        ),
        (
            r##"<frame_style_set name="normal"/>"##,
            "<frame_style_set> name \"normal\" used a second time",
        ),
    ];
    for (extra, expected) in cases {
        let err = load("", "", extra).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic, "{extra}");
        assert!(matches!(err, ThemeError::Located { .. }));
        assert_eq!(message(&err), expected);
    }
}

#[test]
fn self_include_is_circular() {
    let draw_ops = r##"
  <draw_ops name="loop">
    <include name="loop"/>
  </draw_ops>"##;
    let err = load(draw_ops, "", "").unwrap_err();
    assert_eq!(
        message(&err),
        "Including draw_ops \"loop\" here would create a circular reference"
    );

    let draw_ops = r##"
  <draw_ops name="tiles">
    <tile name="tiles" tile_width="4" tile_height="4"/>
  </draw_ops>"##;
    let err = load(draw_ops, "", "").unwrap_err();
    assert!(message(&err).contains("circular reference"));
}

#[test]
fn includes_of_earlier_lists_are_fine() {
    let draw_ops = r##"
  <draw_ops name="inner">
    <include name="button" x="1" y="1" width="width - 2" height="height - 2"/>
  </draw_ops>
  <draw_ops name="outer">
    <include name="inner"/>
    <tile name="button" tile_width="8" tile_height="height" tile_xoffset="2"/>
  </draw_ops>"##;
    let theme = load(draw_ops, "", "").unwrap();
    let outer = theme.lookup_draw_op_list("outer").unwrap();
    let button = theme.lookup_draw_op_list("button").unwrap();
    assert!(theme.draw_op_list_contains(outer, button));
    assert!(!theme.draw_op_list_contains(button, outer));
}

#[test]
fn forward_references_fail() {
    let draw_ops = r##"
  <draw_ops name="early">
    <include name="later"/>
  </draw_ops>"##;
    let err = load(draw_ops, "", "").unwrap_err();
    assert_eq!(
        message(&err),
        "No <draw_ops> called \"later\" has been defined"
    );

    let extra = r##"<frame_style name="x" geometry="missing"/>"##;
    let err = load("", "", extra).unwrap_err();
    assert_eq!(
        message(&err),
        "<frame_style> geometry \"missing\" has not been defined"
    );
}

#[test]
fn bad_expressions_fail_the_load() {
    let draw_ops = r##"
  <draw_ops name="bad">
    <rectangle color="#000" x="2 * foo" y="0" width="1" height="1"/>
  </draw_ops>"##;
    let err = load(draw_ops, "", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Expression);
    assert!(matches!(
        err.innermost(),
        ThemeError::Expression(ExprError::UnknownVariable(name)) if name == "foo"
    ));

    let draw_ops = r##"
  <draw_ops name="bad">
    <rectangle color="#000" x="object_width" y="0" width="1" height="1"/>
  </draw_ops>"##;
    let err = load(draw_ops, "", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Expression);

    let draw_ops = r##"
  <draw_ops name="bad">
    <clip x="10 / width" y="0" width="1" height="1"/>
  </draw_ops>"##;
    let err = load(draw_ops, "", "").unwrap_err();
    assert!(matches!(
        err.innermost(),
        ThemeError::Expression(ExprError::DivideByZero)
    ));
}

#[test]
fn attribute_problems() {
    let draw_ops = r##"
  <draw_ops name="bad">
    <line color="#000" x1="0" y1="0" x2="1"/>
  </draw_ops>"##;
    let err = load(draw_ops, "", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Markup);
    assert_eq!(message(&err), "No \"y2\" attribute on element <line>");

    let draw_ops = r##"
  <draw_ops name="bad">
    <arc color="#000" x="0" y="0" width="1" height="1" start_angle="0" extent_angle="400"/>
  </draw_ops>"##;
    let err = load(draw_ops, "", "").unwrap_err();
    assert_eq!(
        message(&err),
        "Angle must be between 0.0 and 360.0, was 400"
    );

    let draw_ops = r##"
  <draw_ops name="bad">
    <tint color="#000" x="0" y="0" width="1" height="1" alpha="1.5"/>
  </draw_ops>"##;
    let err = load(draw_ops, "", "").unwrap_err();
    assert!(message(&err).starts_with("Alpha must be between 0.0"));
}

#[test]
fn gradients_need_a_color() {
    let draw_ops = r##"
  <draw_ops name="grad">
    <gradient type="vertical" x="0" y="0" width="width" height="height"/>
  </draw_ops>"##;
    let err = load(draw_ops, "", "").unwrap_err();
    assert_eq!(message(&err), "Gradients should have at least one color");
}

#[test]
fn incomplete_style_is_rejected() {
    let extra = r##"
  <frame_style name="bare" geometry="normal">
    <button function="close" state="normal" draw_ops="button"/>
  </frame_style>"##;
    let err = load("", "", extra).unwrap_err();
    assert_eq!(
        message(&err),
        "<button function=\"close\" state=\"pressed\" draw_ops=\"whatever\"/> must be specified for this frame style"
    );
}

#[test]
fn incomplete_style_set_is_rejected() {
    let extra = r##"
  <frame_style_set name="partial">
    <frame focus="yes" state="normal" resize="both" style="normal"/>
  </frame_style_set>"##;
    let err = load("", "", extra).unwrap_err();
    assert!(message(&err).starts_with("Missing <frame state=\"normal\""));
}

#[test]
fn two_draw_ops_for_one_piece() {
    let pieces = r##"
    <piece position="title" draw_ops="button">
      <draw_ops/>
    </piece>"##;
    let err = load("", pieces, "").unwrap_err();
    assert!(message(&err).starts_with("Can't have a two draw_ops for a <piece> element"));

    let pieces = r##"<piece position="title"/>"##;
    let err = load("", pieces, "").unwrap_err();
    assert_eq!(message(&err), "No draw_ops provided for frame piece");
}

#[test]
fn unknown_window_type() {
    let extra = r##"<window type="popup" style_set="normal"/>"##;
    let err = load("", "", extra).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Semantic);
    assert_eq!(message(&err), "Unknown type \"popup\" on <window> element");
}

#[test]
fn normal_window_type_is_required() {
    let doc = theme_document("", "", "").replace(
        r##"<window type="normal" style_set="normal"/>"##,
        r##"<window type="dialog" style_set="normal"/>"##,
    );
    let err = parse_theme(&doc, &options()).unwrap_err();
    assert!(message(&err).starts_with("No frame style set for window type \"normal\""));
}

#[test]
fn errors_carry_their_location() {
    let doc = "<metacity_theme>\n  <info>\n    <bogus/>\n  </info>\n</metacity_theme>\n";
    let err = parse_theme(doc, &options()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Line 3 character 5: Element <bogus> is not allowed below <info>");
}

#[test]
fn wrong_root_element() {
    let err = parse_theme("<theme></theme>", &options()).unwrap_err();
    assert_eq!(
        message(&err),
        "Outermost element in theme must be <metacity_theme> not <theme>"
    );
}

// ============================================================================
// Search path
// ============================================================================

#[test]
fn load_theme_searches_directories_in_order() {
    let root = std::env::temp_dir().join(format!("mtheme-loader-{}", std::process::id()));
    let found = root.join("second").join("Test");
    std::fs::create_dir_all(&found).unwrap();
    std::fs::write(
        found.join(mtheme::THEME_FILENAME),
        theme_document("", "", ""),
    )
    .unwrap();

    let options = LoadOptions::new("Test")
        .with_search_dirs(vec![root.join("first").join("Test"), found.clone()]);
    let theme = load_theme(&options).unwrap();
    assert_eq!(theme.info.readable_name.as_deref(), Some("Test"));

    let options = LoadOptions::new("Test").with_search_dirs(vec![root.join("nowhere")]);
    assert_eq!(load_theme(&options).unwrap_err().kind(), ErrorKind::Io);

    std::fs::remove_dir_all(&root).unwrap();
}
