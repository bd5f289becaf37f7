use reflectkit::reflect::{Kind, Result};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// Print every kind with its family.
pub fn run(args: Args) -> Result<()> {
	if args.json {
		let rows: Vec<KindJson> = Kind::ALL
			.into_iter()
			.map(|kind| KindJson {
				kind: kind.name(),
				family: kind.family().name(),
				scalar: kind.is_scalar(),
			})
			.collect();
		emit_json(&rows);
		return Ok(());
	}

	for kind in Kind::ALL {
		println!("{:<16} {}", kind.name(), kind.family());
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct KindJson {
	kind: &'static str,
	family: &'static str,
	scalar: bool,
}
