use std::io::Write;
use fal_probe::{Credential, Prober, ProbeConfig};

#[tokio::main(flavor = "current_thread")]
async fn main()
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("off")
    ).init();

    let prober = Prober::new(ProbeConfig::default());
    let credential = Credential::from_env();

    let mut stdout = std::io::stdout();
    let outcome = prober.run(credential.as_ref(), &mut stdout).await;
    let _ = stdout.flush();
    std::process::exit(outcome.exit_code());
}
