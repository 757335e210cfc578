use scu_openbis_launcher::{Target, launcher};

fn main() {
    std::process::exit(launcher::main(Target::Importer));
}
