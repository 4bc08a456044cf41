use std::io::Write;
use log::{debug, info};

use crate::config::{Credential, ProbeConfig};
use crate::error::{Error, Result};
use crate::providers::fal::FalClient;
use crate::report;
use crate::request::{probe_request, ProbeReport};

/// How a probe run ended; maps onto the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome
{   Success
  , Failure
}

impl Outcome
{   pub fn exit_code(self) -> i32
    {   match self
        {   Outcome::Success => 0
          , Outcome::Failure => 1
        }
    }
}

/// Connectivity prober: one credential in, one request out, one report
pub struct Prober
{   config: ProbeConfig
}

impl Prober
{   pub fn new(config: ProbeConfig) -> Self
    {   Prober { config }
    }

    pub fn config(&self) -> &ProbeConfig
    {   &self.config
    }

    /// Send the probe request and collect the report.
    /// A missing credential fails before any client is built.
    pub async fn probe(
      &self
    , credential: Option<&Credential>
    ) -> Result<ProbeReport>
    {   let credential = credential.ok_or_else(|| {
          Error::MissingCredential(
            crate::config::CREDENTIAL_ENV_VAR.to_string()
          )
        })?;

        let client = FalClient::new(&self.config, credential)?;
        let request = probe_request(&self.config);
        debug!("Probing {}", client.endpoint());

        let response = client.chat_completion(&request).await?;
        info!("Probe served by {}", response.model);
        Ok(ProbeReport::from(response))
    }

    /// Full run: probe, render to `out`, return the outcome.
    /// Write errors on `out` are ignored; the outcome still reflects
    /// the probe.
    pub async fn run<W: Write>(
      &self
    , credential: Option<&Credential>
    , out: &mut W
    ) -> Outcome
    {   if credential.is_none()
        {   debug!("No credential, skipping network call");
            let _ = report::write_failure(
              out,
              &Error::MissingCredential(
                crate::config::CREDENTIAL_ENV_VAR.to_string()
              )
            );
            return Outcome::Failure;
        }

        let _ = report::write_heading(out, &self.config);

        match self.probe(credential).await
        {   Ok(probe_report) => {
              let _ = report::write_success(out, &probe_report);
              Outcome::Success
            }
          , Err(e) => {
              debug!("Probe failed: {}", e);
              let _ = report::write_failure(out, &e);
              Outcome::Failure
            }
        }
    }
}
