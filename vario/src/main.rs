use clap::Parser;
use vario_lessons::LessonReport;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run a single lesson instead of the whole collection.
    lesson: Option<String>,

    /// Also run the practice exercises.
    #[arg(long)]
    practices: bool,
}

fn main() -> eyre::Result<()> {
    simple_logging::log_to_stderr(log::LevelFilter::Warn);

    let args = Args::parse();

    if let Some(name) = args.lesson {
        let Some(report) = vario_lessons::find(name.as_str()) else {
            eyre::bail!(
                "unknown lesson '{}', expected one of: {}",
                name,
                vario_lessons::lesson_names().join(", ")
            );
        };

        print_report(&report?);

        return Ok(());
    }

    for report in vario_lessons::run_all()? {
        print_report(&report);
    }

    if args.practices {
        for report in vario_lessons::practices()? {
            print_report(&report);
        }
    }

    Ok(())
}

fn print_report(report: &LessonReport) {
    println!("== {} ==", report.title);
    println!("{}", report.commentary);

    for line in &report.lines {
        println!("{}", line);
    }

    println!();
}
