//! Diabetes-risk inference for Rust.
//!
//! glyco wraps a pre-trained binary classification artifact: eight clinical
//! measurements go in, a class, a probability and a risk tier come out.
//!
//! ```no_run
//! use glyco::prelude::*;
//!
//! let handler = InferenceHandler::new(ModelHandle::load("models/diabetes_pipeline.json"));
//! let vector = MeasurementVector::new([6.0, 148.0, 72.0, 35.0, 0.0, 33.6, 0.627, 50.0]).unwrap();
//!
//! match handler.predict(&vector) {
//!     Ok(result) => println!("{} risk ({:.1}%)", result.risk_tier.as_str(), result.probability_percent()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub use glyco_core;
pub use glyco_engine;
pub use glyco_model;

#[cfg(feature = "server")]
pub use glyco_server;

pub mod prelude {
    pub use glyco_core::{
        Classifier, ClassifierError, HealthAdvice, Measurement, MeasurementVector, PredictError,
        PredictionResult, RiskThreshold, RiskTier,
    };
    pub use glyco_engine::InferenceHandler;
    pub use glyco_model::{LogisticPipeline, ModelHandle};
}
