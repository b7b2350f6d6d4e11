// Strings rendered into the page.

pub fn result_message(label: &str) -> String {
    format!("You've unlocked {} Free Spins & more!", label)
}

/// CSS transform for the wheel element. The tilt gives the flat wheel image
/// a little depth; the rotation is the engine angle.
pub fn wheel_transform(angle_deg: f64) -> String {
    format!(
        "translate(-50%, -50%) rotateX(15deg) rotate({:.3}deg)",
        angle_deg
    )
}

pub fn config_attribute(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key)
}
