//! On-device processor interface
//!
//! Every processor in NeuroLens runs locally and follows the same
//! lifecycle: initialize, process inputs, release. The rewrite engine is
//! the processor shipped here; it needs no model, so it is ready from
//! construction and stays ready.

use crate::config::RewriteConfig;
use crate::error::ProcessorError;
use crate::rewrite::{RewriteRequest, RewriteResult, ToneRewriter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

/// Channel capacity for streamed processing
const STREAM_BUFFER: usize = 32;

/// Trait for on-device processors
pub trait Processor: Send {
    type Input: Send + 'static;
    type Output: Send + 'static;

    /// Prepare any models or resources
    fn initialize(&mut self) -> Result<(), ProcessorError>;

    /// Process one input
    fn process(&mut self, input: Self::Input) -> Result<Self::Output, ProcessorError>;

    /// Whether `process` may be called
    fn is_ready(&self) -> bool;

    /// Release models or resources
    fn release(&mut self);

    /// Run `f` only when the processor is ready
    fn run_checked<T, F>(&mut self, f: F) -> Result<T, ProcessorError>
    where
        F: FnOnce(&mut Self) -> T,
        Self: Sized,
    {
        if !self.is_ready() {
            return Err(ProcessorError::NotInitialized);
        }
        Ok(f(self))
    }
}

/// Process each input arriving on `inputs`, emitting results in order
///
/// The processor moves into a background task that ends when `inputs`
/// closes or the returned receiver is dropped.
pub fn process_stream<P>(
    mut processor: P,
    mut inputs: mpsc::Receiver<P::Input>,
) -> mpsc::Receiver<Result<P::Output, ProcessorError>>
where
    P: Processor + 'static,
{
    let (tx, rx) = mpsc::channel(STREAM_BUFFER);

    tokio::spawn(async move {
        let mut processed = 0usize;
        while let Some(input) = inputs.recv().await {
            let result = processor.process(input);
            if tx.send(result).await.is_err() {
                tracing::debug!("Stream receiver dropped after {} items", processed);
                return;
            }
            processed += 1;
        }
        tracing::debug!("Input stream closed after {} items", processed);
    });

    rx
}

/// Rewrite engine exposed through the [`Processor`] interface
pub struct RewriteEngine {
    rewriter: ToneRewriter,
    rng: StdRng,
}

impl RewriteEngine {
    /// Create an engine from configuration, seeded when `config.seed` is set
    pub fn new(config: &RewriteConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                tracing::debug!("Using fixed rewrite seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self {
            rewriter: ToneRewriter::new(config),
            rng,
        }
    }

    /// Rewrite a request directly
    pub fn rewrite(&mut self, request: &RewriteRequest) -> RewriteResult {
        self.rewriter.rewrite_request(request, &mut self.rng)
    }

    /// Rewrite `text` in every tone
    pub fn rewrite_all(&mut self, text: &str) -> Vec<RewriteResult> {
        self.rewriter.rewrite_all(text, &mut self.rng)
    }
}

impl Default for RewriteEngine {
    fn default() -> Self {
        Self::new(&RewriteConfig::default())
    }
}

impl Processor for RewriteEngine {
    type Input = RewriteRequest;
    type Output = RewriteResult;

    fn initialize(&mut self) -> Result<(), ProcessorError> {
        Ok(())
    }

    fn process(&mut self, input: RewriteRequest) -> Result<RewriteResult, ProcessorError> {
        self.run_checked(|engine| engine.rewrite(&input))
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn release(&mut self) {}
}
