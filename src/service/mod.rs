//! Service layer for the statistics and progression pipeline.
//!
//! Two pipelines share the finished-match input. Pipeline A runs per match
//! as it finishes: build per-player summaries ([`summary`]), fold them into
//! career aggregates ([`career`]), and record the champion when the final
//! settles ([`champion`]). Pipeline B runs on demand from an admin action:
//! compute ranked group standings ([`standings`]) and seed the knockout
//! bracket from the qualifiers ([`knockout`]).

pub mod career;
pub mod champion;
pub mod knockout;
pub mod retry;
pub mod standings;
pub mod summary;
