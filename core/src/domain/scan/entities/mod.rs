pub mod analysis_payload;
pub mod classification;
pub mod scan_result;

pub use analysis_payload::*;
pub use classification::*;
pub use scan_result::*;
