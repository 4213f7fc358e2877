pub mod order;
pub mod order_line;
pub mod product;

fn non_negative(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{field} must be a finite number, got {value}"));
    }
    if value < 0.0 {
        return Err(format!("{field} cannot be negative, got {value}"));
    }
    Ok(())
}
