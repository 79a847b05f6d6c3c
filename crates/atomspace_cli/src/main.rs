//! CLI demo entry point.
//!
//! # Responsibility
//! - Build a small sample federation through the public core API.
//! - Print its hierarchy snapshot and resolve any paths given as arguments.
//!
//! Set `ATOMSPACE_LOG_DIR` to an absolute directory to enable file logging.

use atomspace_core::{
    core_version, default_log_level, init_logging, AtomSpace, AtomSpaceResult, ResourceQuery,
    DEFAULT_GLOBAL_NAME,
};
use log::info;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "ATOMSPACE_LOG_DIR";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }
    println!("atomspace_core version={}", core_version());

    let space = match build_sample() {
        Ok(space) => space,
        Err(err) => {
            eprintln!("failed to build sample federation: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "event=cli_sample_built module=cli status=ok atoms={}",
        space.atom_count()
    );

    match space.hierarchy_info(DEFAULT_GLOBAL_NAME) {
        Ok(hierarchy) => match serde_json::to_string_pretty(&hierarchy) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("failed to render hierarchy: {err}"),
        },
        Err(err) => eprintln!("failed to read hierarchy: {err}"),
    }

    let host_query = ResourceQuery::new().with_kind("host");
    match space.find_resources(DEFAULT_GLOBAL_NAME, &host_query) {
        Ok(hosts) => {
            for host in hosts {
                println!("host {}", host.path());
            }
        }
        Err(err) => eprintln!("failed to list hosts: {err}"),
    }

    let mut status = ExitCode::SUCCESS;
    for path in std::env::args().skip(1) {
        match space.get_atom_by_path(&path) {
            Ok(atom) => println!("{path} -> {atom}"),
            Err(err) => {
                eprintln!("{path}: {err}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}

fn build_sample() -> AtomSpaceResult<AtomSpace> {
    let mut space = AtomSpace::with_default_global();
    let global = DEFAULT_GLOBAL_NAME;

    space.create_global_resource(global, "global-dns", "service")?;
    space.create_organization(global, "acme")?;
    space.create_org_resource(global, "acme", "acme-network", "network")?;
    space.create_project(global, "acme", "web")?;
    let srv = space.create_resource(global, "acme", "web", "srv01", "host")?;
    space.set_attribute(srv, "ip", "10.0.0.1")?;
    space.create_resource(global, "acme", "web", "postgres", "database")?;
    space.create_organization(global, "techcorp")?;
    space.create_project(global, "techcorp", "ai-platform")?;
    space.create_resource(global, "techcorp", "ai-platform", "gpu-cluster", "compute")?;
    Ok(space)
}
