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
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "mp3tag", author, version, about, long_about=None)] // Read from `Cargo.toml`
pub struct Args {
    #[command(subcommand)]
    pub action: Action,
    /// Use this config file instead of `~/.config/mp3tag/config.toml`.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Print the tag of a file, fields that are not set show as N/A.
    View {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Replace the tag of a file with the dummy tag from the config.
    Write {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Change one field, one of title, artist, album, year, comment or genre.
    Edit {
        #[arg(value_name = "FIELD")]
        field: String,
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "VALUE")]
        value: String,
    },
}
