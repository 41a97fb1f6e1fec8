mod validate;
mod validate_bounds;
mod validate_range;

pub struct ConfigValidator;
