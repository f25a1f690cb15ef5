//! Example Runner: selects scenarios, runs each variant and collects reports
use crate::config::RunConfig;
use crate::console::Transcript;
use crate::context::ExecutionContext;
use crate::error::{Result, SolidError};
use crate::example::{Example, Principle, Variant};
use crate::report::{transcript_hash, ExampleReport};
use std::time::Instant;

pub struct ExampleRunner {
    examples: Vec<Box<dyn Example>>,
}

impl ExampleRunner {
    pub fn new(examples: Vec<Box<dyn Example>>) -> Self {
        Self { examples }
    }

    pub fn examples(&self) -> impl Iterator<Item = &dyn Example> {
        self.examples.iter().map(|e| e.as_ref())
    }

    pub fn get(&self, id: &str) -> Option<&dyn Example> {
        self.examples().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Examples picked by `config`, in registration order.
    ///
    /// Every requested id must exist and belong to a selected principle.
    pub fn select(&self, config: &RunConfig) -> Result<Vec<&dyn Example>> {
        for id in &config.examples {
            let example = self
                .get(id)
                .ok_or_else(|| SolidError::UnknownExample(id.clone()))?;
            if !config.includes(example.principle()) {
                return Err(SolidError::ExcludedExample {
                    id: id.clone(),
                    principle: example.principle().to_string(),
                });
            }
        }

        Ok(self
            .examples()
            .filter(|e| config.includes(e.principle()))
            .filter(|e| config.examples.is_empty() || config.examples.iter().any(|id| id == e.id()))
            .collect())
    }

    pub fn run(&self, config: &RunConfig, ctx: &ExecutionContext) -> Result<Vec<ExampleReport>> {
        let selected = self.select(config)?;
        let variants = config.ordered_variants();
        let _span = tracing::info_span!("run", trace_id = %ctx.trace_id).entered();
        tracing::info!(
            examples = selected.len(),
            variants = variants.len(),
            seeded = ctx.is_seeded(),
            "starting run"
        );

        let mut reports = Vec::with_capacity(selected.len() * variants.len());
        for example in selected {
            for &variant in &variants {
                reports.push(self.run_one(example, variant, ctx));
            }
        }

        tracing::info!(reports = reports.len(), "run finished");
        Ok(reports)
    }

    pub fn run_one(
        &self,
        example: &dyn Example,
        variant: Variant,
        ctx: &ExecutionContext,
    ) -> ExampleReport {
        let start = Instant::now();
        let transcript = Transcript::new();

        example.run(variant, ctx, &transcript);

        let lines = transcript.into_lines();
        let latency_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            example = example.id(),
            %variant,
            lines = lines.len(),
            latency_ms,
            "example finished"
        );

        ExampleReport {
            id: example.id().to_string(),
            principle: example.principle(),
            title: example.title().to_string(),
            variant,
            transcript_hash: transcript_hash(&lines),
            lines,
            deterministic: example.deterministic() || ctx.is_seeded(),
            latency_ms,
        }
    }

    pub fn principles(&self) -> Vec<Principle> {
        let mut principles: Vec<Principle> = self.examples().map(|e| e.principle()).collect();
        principles.sort();
        principles.dedup();
        principles
    }
}
