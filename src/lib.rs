pub mod core;
pub mod export;
pub mod extract;
pub mod pipeline;

pub use crate::core::headings::HeadingDetector;
pub use crate::core::model::{AnalysisReport, Heading, Lang};
pub use crate::core::segment::SentenceSegmenter;
pub use crate::core::summarize::{Summarizer, SummaryConfig};
