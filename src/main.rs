use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

use process_unit_converter::{app, config, form::Form, quantity::UnitDomain, ui_cli};

/// 압력/온도/밀도 단위 변환기 (터미널).
#[derive(Debug, Parser)]
#[command(name = "process_unit_converter_cli", version)]
struct Cli {
    #[command(flatten)]
    config: config::ConfigArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 값을 한 번 변환해 출력한다
    Convert {
        domain: DomainArg,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// 지원 단위를 나열한다 (*: 기준 단위)
    Units { domain: Option<DomainArg> },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DomainArg {
    Pressure,
    Temperature,
    Density,
}

impl From<DomainArg> for UnitDomain {
    fn from(value: DomainArg) -> Self {
        match value {
            DomainArg::Pressure => UnitDomain::Pressure,
            DomainArg::Temperature => UnitDomain::Temperature,
            DomainArg::Density => UnitDomain::Density,
        }
    }
}

/// 프로그램의 엔트리 포인트. 인자가 없으면 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    env_logger::init();
    match try_run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Command::Convert { domain, value, from, to }) => {
            println!("{}", app::convert_once(domain.into(), value, &from, &to)?);
        }
        Some(Command::Units { domain }) => match domain {
            Some(d) => ui_cli::print_units(&[d.into()]),
            None => ui_cli::print_units(&UnitDomain::ALL),
        },
        None => {
            let cfg = config::load_or_default(&cli.config.config)?;
            let mut form = Form::new(&cfg);
            app::run(&mut form)?;
        }
    }
    Ok(())
}
