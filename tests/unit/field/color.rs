use super::*;

#[test]
fn new_color_is_opaque() {
    let c = Color::new(150, 5, 150);
    assert_eq!(c.alpha(), 1.0);
    assert_eq!(c.to_css(), "rgba(150,5,150,1)");
}

#[test]
fn set_alpha_chains_and_mutates() {
    let mut c = Color::new(1, 2, 3);
    assert_eq!(c.set_alpha(0.25).to_css(), "rgba(1,2,3,0.25)");
    assert_eq!(c.alpha(), 0.25);
}

#[test]
fn clone_is_independent() {
    let base = Color::new(10, 20, 30);
    let mut copy = base.clone();
    copy.set_alpha(0.1);
    assert_eq!(base.alpha(), 1.0);
    assert_eq!(copy.alpha(), 0.1);
}

#[test]
fn rgba8_rounds_and_clamps_alpha() {
    let mut c = Color::new(9, 8, 7);
    assert_eq!(c.set_alpha(0.25).to_rgba8(), [9, 8, 7, 64]);
    assert_eq!(c.set_alpha(1.7).to_rgba8(), [9, 8, 7, 255]);
    assert_eq!(c.set_alpha(-0.5).to_rgba8(), [9, 8, 7, 0]);
}

#[test]
fn json_alpha_defaults_to_opaque() {
    let c: Color = serde_json::from_str(r#"{"r":150,"g":5,"b":150}"#).unwrap();
    assert_eq!(c, Color::new(150, 5, 150));
}
