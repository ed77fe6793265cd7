//! Lazily loaded, shared model artifact

use crate::artifact::ModelArtifact;
use crate::error::ClassifierError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};
use verity_domain::traits::Classifier;
use verity_domain::FeatureVector;

/// Owns the path to a model artifact and the artifact once loaded
///
/// The first prediction loads the file unless [`load`](Self::load) was called
/// first. A failed load is not remembered: the next call tries again.
/// Concurrent first loads may each read the file; the last one to finish is
/// kept, and every reader holds an `Arc` to an immutable artifact.
#[derive(Debug)]
pub struct ModelHandle {
    path: PathBuf,
    resident: RwLock<Option<Arc<ModelArtifact>>>,
}

impl ModelHandle {
    /// Create a handle; nothing is read until first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            resident: RwLock::new(None),
        }
    }

    /// Create a handle around an artifact that is already in memory
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self {
            path: PathBuf::from("<memory>"),
            resident: RwLock::new(Some(Arc::new(artifact))),
        }
    }

    /// Artifact location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether an artifact is resident
    pub fn is_loaded(&self) -> bool {
        self.resident
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Read the artifact from disk now, replacing any resident one
    pub fn load(&self) -> Result<Arc<ModelArtifact>, ClassifierError> {
        let artifact = match ModelArtifact::from_file(&self.path) {
            Ok(artifact) => Arc::new(artifact),
            Err(e) => {
                warn!("Failed to load model from {}: {}", self.path.display(), e);
                return Err(self.unavailable(e));
            }
        };

        info!(
            "Loaded {} model from {} ({} features)",
            artifact.model.kind(),
            self.path.display(),
            artifact.feature_names.len()
        );

        *self
            .resident
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(artifact.clone());

        Ok(artifact)
    }

    /// The resident artifact, loading it first if needed
    pub fn get(&self) -> Result<Arc<ModelArtifact>, ClassifierError> {
        if let Some(artifact) = self
            .resident
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(artifact.clone());
        }

        debug!("Model not resident, loading lazily");
        self.load()
    }

    /// Drop the resident artifact; the next prediction reloads it
    pub fn unload(&self) {
        *self
            .resident
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn unavailable(&self, e: ClassifierError) -> ClassifierError {
        match e {
            ClassifierError::Unavailable { .. } => e,
            other => ClassifierError::Unavailable {
                path: self.path.display().to_string(),
                reason: other.to_string(),
            },
        }
    }
}

impl Classifier for ModelHandle {
    type Error = ClassifierError;

    fn predict(&self, features: &FeatureVector) -> Result<u8, Self::Error> {
        self.get()?.predict(features)
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], Self::Error> {
        self.get()?.predict_proba(features)
    }

    fn classify(&self, features: &FeatureVector) -> Result<(u8, [f64; 2]), Self::Error> {
        let artifact = self.get()?;
        artifact.classify(features)
    }

    fn is_ready(&self) -> bool {
        self.is_loaded()
    }
}
