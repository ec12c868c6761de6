pub mod areas;
pub mod date_format;
pub mod fixture;
pub mod highlight;
pub mod nearest;
pub mod points;
pub mod segments;
pub mod status;
