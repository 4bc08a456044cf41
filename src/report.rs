//! Human-readable output. Everything goes to the given writer; the binary
//! passes stdout.

use std::io::{self, Write};

use crate::config::{CREDENTIAL_ENV_VAR, ProbeConfig};
use crate::error::Error;
use crate::request::ProbeReport;

pub const SUCCESS_BANNER: &str
  = "SUCCESS: fal.ai > OpenRouter > GPT-5.1 connection works!";

pub fn write_usage_hint<W: Write>(out: &mut W) -> io::Result<()>
{   writeln!(out,
      "Error: {} environment variable is required",
      CREDENTIAL_ENV_VAR
    )?;
    writeln!(out,
      "Usage: {}=\"your-fal-key\" fal-probe",
      CREDENTIAL_ENV_VAR
    )
}

pub fn write_heading<W: Write>(
  out: &mut W
, config: &ProbeConfig
) -> io::Result<()>
{   writeln!(out,
      "Testing fal.ai > OpenRouter > {} connection...",
      config.model
    )?;
    writeln!(out)
}

pub fn write_success<W: Write>(
  out: &mut W
, report: &ProbeReport
) -> io::Result<()>
{   writeln!(out, "Response:")?;
    writeln!(out, "{}",
      report.content.as_deref().unwrap_or("(no content)")
    )?;
    writeln!(out)?;
    writeln!(out, "Model: {}", report.model)?;
    match &report.usage
    {   Some(usage) => writeln!(out,
          "Usage: input={}, output={}, total={}",
          usage.prompt_tokens,
          usage.completion_tokens,
          usage.total_tokens
        )?
      , None => writeln!(out, "Usage: unavailable")?
    }
    writeln!(out)?;
    writeln!(out, "{}", SUCCESS_BANNER)
}

pub fn write_failure<W: Write>(
  out: &mut W
, error: &Error
) -> io::Result<()>
{   if error.is_precondition()
    {   return write_usage_hint(out);
    }
    writeln!(out, "Error: {}", error)?;
    if let Error::ApiError { status, body, .. } = error
    {   writeln!(out, "Response status: {}", status)?;
        writeln!(out, "Response body: {}", body)?;
    }
    Ok(())
}
