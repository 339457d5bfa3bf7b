/**
 * MIT License
 *
 * mp3tag - Copyright (c) 2021 Larry Hao
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */
mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use mp3taglib::{config::Settings, edit_path, read_or_empty, write_to_path};
use std::process;
#[macro_use]
extern crate log;

/// Parses the command line, runs the requested action and maps errors to exit code 1
fn main() {
    lovely_env_logger::init_default();

    let args = cli::Args::parse();
    if let Err(err) = actual_main(args) {
        error!("{err:?}");
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn actual_main(args: cli::Args) -> Result<()> {
    let settings = get_settings(&args)?;
    execute_action(args.action, &settings)
}

fn get_settings(args: &cli::Args) -> Result<Settings> {
    match args.config {
        Some(ref path) => Settings::from_file(path)
            .with_context(|| format!("loading config file '{}'", path.display())),
        None => Settings::load().context("loading config"),
    }
}

fn execute_action(action: cli::Action, settings: &Settings) -> Result<()> {
    let options = settings.tag_options();

    match action {
        cli::Action::View { file } => {
            let tag = read_or_empty(&file, &options)?;
            println!("{tag}");
        }
        cli::Action::Write { file } => {
            write_to_path(&file, &settings.dummy.to_tag(), &options)?;
            println!("Tags written successfully.");
        }
        cli::Action::Edit { field, file, value } => {
            edit_path(&file, &field, &value, &options)?;
            println!("Tag edited successfully.");
        }
    };

    Ok(())
}
