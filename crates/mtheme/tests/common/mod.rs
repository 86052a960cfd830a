//! Theme documents shared by the loader tests.

#![allow(dead_code)]

use mtheme::{LoadOptions, Result, Theme, parse_theme};

const BUTTONS: &str = r#"    <button function="close" state="normal" draw_ops="button"/>
    <button function="close" state="pressed" draw_ops="button"/>
    <button function="close" state="prelight" draw_ops="button"/>
    <button function="maximize" state="normal" draw_ops="button"/>
    <button function="maximize" state="pressed" draw_ops="button"/>
    <button function="maximize" state="prelight" draw_ops="button"/>
    <button function="minimize" state="normal" draw_ops="button"/>
    <button function="minimize" state="pressed" draw_ops="button"/>
    <button function="minimize" state="prelight" draw_ops="button"/>
    <button function="menu" state="normal" draw_ops="button"/>
    <button function="menu" state="pressed" draw_ops="button"/>
    <button function="menu" state="prelight" draw_ops="button"/>"#;

const FRAMES: &str = r#"    <frame focus="yes" state="normal" resize="both" style="normal"/>
    <frame focus="no" state="normal" resize="both" style="normal"/>
    <frame focus="yes" state="normal" resize="none" style="normal"/>
    <frame focus="no" state="normal" resize="none" style="normal"/>
    <frame focus="yes" state="normal" resize="vertical" style="normal"/>
    <frame focus="no" state="normal" resize="vertical" style="normal"/>
    <frame focus="yes" state="normal" resize="horizontal" style="normal"/>
    <frame focus="no" state="normal" resize="horizontal" style="normal"/>
    <frame focus="yes" state="maximized" style="normal"/>
    <frame focus="no" state="maximized" style="normal"/>
    <frame focus="yes" state="shaded" style="normal"/>
    <frame focus="no" state="shaded" style="normal"/>
    <frame focus="yes" state="maximized_and_shaded" style="normal"/>
    <frame focus="no" state="maximized_and_shaded" style="normal"/>"#;

/// A complete theme. `draw_ops` goes after the shared `button` list,
/// `pieces` inside the `normal` frame style and `extra` after the `normal`
/// style set.
pub fn theme_document(draw_ops: &str, pieces: &str, extra: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<metacity_theme>
  <info>
    <name>Test</name>
    <author>A. Person</author>
    <copyright>Copyright 2026</copyright>
    <date>October 2026</date>
    <description>Fixture theme</description>
  </info>
  <constant name="ButtonPad" value="2"/>
  <constant name="Ratio" value="0.5"/>
  <frame_geometry name="normal" title_scale="medium">
    <distance name="left_width" value="6"/>
    <distance name="right_width" value="6"/>
    <distance name="bottom_height" value="6"/>
    <distance name="left_titlebar_edge" value="4"/>
    <distance name="right_titlebar_edge" value="4"/>
    <distance name="button_width" value="18"/>
    <distance name="button_height" value="18"/>
    <distance name="title_vertical_pad" value="2"/>
    <border name="title_border" left="2" right="2" top="3" bottom="3"/>
    <border name="button_border" left="0" right="0" top="2" bottom="2"/>
  </frame_geometry>
  <draw_ops name="button">
    <rectangle color="gtk:fg[NORMAL]" x="ButtonPad" y="ButtonPad" width="width - ButtonPad * 2" height="height - ButtonPad * 2"/>
  </draw_ops>
{draw_ops}
  <frame_style name="normal" geometry="normal">
{buttons}
{pieces}
  </frame_style>
  <frame_style_set name="normal">
{frames}
  </frame_style_set>
{extra}
  <window type="normal" style_set="normal"/>
</metacity_theme>
"#,
        buttons = BUTTONS,
        frames = FRAMES,
    )
}

pub fn options() -> LoadOptions {
    LoadOptions::new("Test")
}

pub fn load(draw_ops: &str, pieces: &str, extra: &str) -> Result<Theme> {
    parse_theme(&theme_document(draw_ops, pieces, extra), &options())
}
