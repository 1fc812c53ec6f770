// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::{value_t, App, Arg};
use hexspace::{
    board::{GridPoint, HexDimensions, ObjectArea},
    movement::Selection,
    ships::{ShipInstance, ShipTypes},
    viewport::Viewport,
};
use log::{info, LevelFilter};
use once_cell::sync::Lazy;
use rand::{distributions::Uniform, Rng};
use regex::{Captures, Regex};
use simple_logger::SimpleLogger;

use crate::screen::{Screen, Starfield};

mod screen;

fn main() -> Result<()> {
    let matches = App::new("Hexgame")
        .version("0.1")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Move ships around a field of hexagons in the terminal.")
        .arg(
            Arg::with_name("rows")
                .long("rows")
                .value_name("ROWS")
                .help("number of rows of hexes in the grid")
                .takes_value(true)
                .default_value("12"),
        )
        .arg(
            Arg::with_name("cols")
                .long("cols")
                .value_name("COLS")
                .help("number of columns of hexes in the grid")
                .takes_value(true)
                .default_value("24"),
        )
        .arg(
            Arg::with_name("view_rows")
                .long("view-rows")
                .value_name("ROWS")
                .help("number of rows of hexes shown at once")
                .takes_value(true)
                .default_value("4"),
        )
        .arg(
            Arg::with_name("view_cols")
                .long("view-cols")
                .value_name("COLS")
                .help("number of columns of hexes shown at once")
                .takes_value(true)
                .default_value("8"),
        )
        .arg(
            Arg::with_name("ships")
                .short("s")
                .long("ships")
                .value_name("SHIPS")
                .help("number of ships placed at random")
                .takes_value(true)
                .default_value("6"),
        )
        .arg(
            Arg::with_name("plain")
                .long("plain")
                .help("print without colors"),
        )
        .arg(
            Arg::with_name("log_level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .help("level of log messages written to stderr")
                .takes_value(true)
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .case_insensitive(true)
                .default_value("warn"),
        )
        .get_matches();

    SimpleLogger::new()
        .with_level(value_t!(matches, "log_level", LevelFilter)?)
        .init()?;

    let dim = HexDimensions::try_new(
        value_t!(matches, "rows", i32)?,
        value_t!(matches, "cols", i32)?,
    )?;
    let view = GridPoint::new(
        value_t!(matches, "view_rows", i32)?,
        value_t!(matches, "view_cols", i32)?,
    );
    let viewport = Viewport::new(view, dim.max())?;
    let num_ships = value_t!(matches, "ships", usize)?;
    if num_ships > dim.total_size() {
        bail!("{} ships do not fit on a grid of {} hexes", num_ships, dim.total_size());
    }

    let mut rng = rand::thread_rng();
    let mut area = ObjectArea::new(dim);
    place_random_ships(&mut rng, &mut area, num_ships);
    let screen = Screen::new(view, Starfield::new(&mut rng, dim));

    let mut session = Session {
        area,
        viewport,
        selection: Selection::default(),
        catalog: ShipTypes::standard(),
        screen,
        cursor: None,
        color: !matches.is_present("plain"),
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    session.run(&mut input)?;
    Ok(())
}

/// Put `count` ships on random empty hexes, facing random directions.
fn place_random_ships(rng: &mut impl Rng, area: &mut ObjectArea<usize>, count: usize) {
    let rows = Uniform::new(0, area.dimensions().rows());
    let cols = Uniform::new(0, area.dimensions().cols());
    for id in 0..count {
        let mut ship = ShipInstance::new(id, ShipTypes::NORMAL, rng.gen());
        loop {
            let pos = GridPoint::new(rng.sample(rows), rng.sample(cols));
            match area.place_ship(pos, ship) {
                Ok(()) => break,
                Err(err) => ship = err.into_ship(),
            }
        }
    }
}

enum Command {
    Select(GridPoint),
    Move(GridPoint),
    Click(i32, i32),
    Scroll(GridPoint),
    Deselect,
    Show,
    Help,
    Quit,
}

/// State of a single game.
struct Session {
    area: ObjectArea<usize>,
    viewport: Viewport,
    selection: Selection,
    catalog: ShipTypes,
    screen: Screen,
    cursor: Option<GridPoint>,
    color: bool,
}

impl Session {
    fn run(&mut self, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
        println!("Type help or ? for commands.");
        self.show()?;
        loop {
            println!();
            let cmd = input.read_input_lower(">", parse_command)?;
            match cmd {
                Command::Select(pos) => self.select(pos)?,
                Command::Move(target) => self.commit(target)?,
                Command::Click(row, col) => match self.viewport.hex_at(row, col) {
                    None => println!("No hex at {}/{}.", row, col),
                    Some(hex) if self.selection.targets().contains(&hex) => self.commit(hex)?,
                    Some(hex) if self.area.ship_at(hex).is_some() => self.select(hex)?,
                    Some(hex) => {
                        println!("Hex {} is empty space.", hex);
                        self.cursor = Some(hex);
                        self.show()?;
                    }
                },
                Command::Scroll(diff) => {
                    if self.viewport.scroll_by(diff) {
                        self.show()?;
                    } else {
                        println!("Cannot scroll any further.");
                    }
                }
                Command::Deselect => {
                    self.selection.deselect(&mut self.area);
                    self.cursor = None;
                    self.show()?;
                }
                Command::Show => self.show()?,
                Command::Help => print_help(),
                Command::Quit => return Ok(()),
            }
        }
    }

    fn select(&mut self, pos: GridPoint) -> io::Result<()> {
        match self.selection.select(&mut self.area, &self.catalog, pos) {
            Ok(targets) => {
                if let Some(ship) = self.area.ship_at(pos) {
                    println!(
                        "Ship {} at {} facing {}, {} moves.",
                        ship.id(),
                        pos,
                        ship.direction(),
                        targets.len()
                    );
                }
                self.cursor = Some(pos);
                self.viewport.update(pos);
                self.show()
            }
            Err(err) => {
                println!("Cannot select: {}.", err);
                Ok(())
            }
        }
    }

    fn commit(&mut self, target: GridPoint) -> io::Result<()> {
        match self.selection.commit(&mut self.area, target) {
            Ok(pos) => {
                info!("Moved ship to {}", pos);
                self.cursor = Some(pos);
                self.viewport.update(pos);
                if let Ok(targets) = self.selection.project(&mut self.area, &self.catalog) {
                    println!("Moved to {}, {} moves from here.", pos, targets.len());
                }
                self.show()
            }
            Err(err) => {
                println!("Cannot move: {}.", err);
                Ok(())
            }
        }
    }

    /// Render the viewport and print it along with the ships.
    fn show(&mut self) -> io::Result<()> {
        self.screen.render(&self.area, &self.viewport, self.cursor);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let pos = self.viewport.pos();
        let end = pos + self.viewport.dim() - GridPoint::new(1, 1);
        writeln!(out, "Showing hexes {} to {} of {}", pos, end, self.viewport.max())?;
        self.screen.print(&mut out, self.color)?;
        write!(out, "Ships:")?;
        for (pos, ship) in self.area.ships() {
            let mark = if self.selection.selected() == Some(pos) { "*" } else { "" };
            write!(out, " {}{}@{}", mark, ship.id(), pos)?;
        }
        writeln!(out)?;
        if !self.selection.targets().is_empty() {
            write!(out, "Moves:")?;
            for target in self.selection.targets() {
                write!(out, " {}", target)?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}

/// Parse a row and column pair from the named groups of a command.
fn parse_point(captures: &Captures) -> Option<GridPoint> {
    match (captures["row"].parse(), captures["col"].parse()) {
        (Ok(row), Ok(col)) => Some(GridPoint::new(row, col)),
        _ => {
            println!("invalid position {}/{}", &captures["row"], &captures["col"]);
            None
        }
    }
}

fn parse_command(input: &str) -> Option<Command> {
    /// Matchers for commands with args.
    static SELECT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:select|sel)\s+
        (?P<row>[0-9]+)(?:\s*[,/]\s*|\s+)(?P<col>[0-9]+)$",
        )
        .unwrap()
    });
    static MOVE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:move|mv|go)\s+
        (?:(?:to|->|=>)\s+)?
        (?P<row>[0-9]+)(?:\s*[,/]\s*|\s+)(?P<col>[0-9]+)$",
        )
        .unwrap()
    });
    static CLICK: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:click|c)\s+
        (?P<row>[0-9]+)(?:\s*[,/]\s*|\s+)(?P<col>[0-9]+)$",
        )
        .unwrap()
    });
    static SCROLL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:scroll|sc)\s+
        (?P<dir>\w+)
        (?:\s+(?P<count>[0-9]+))?$",
        )
        .unwrap()
    });

    match input {
        "?" | "help" | "h" => Some(Command::Help),
        "show" | "s" | "" => Some(Command::Show),
        "deselect" | "unselect" | "d" => Some(Command::Deselect),
        "quit" | "exit" | "q" => Some(Command::Quit),
        other => {
            if let Some(captures) = SELECT.captures(other) {
                parse_point(&captures).map(Command::Select)
            } else if let Some(captures) = MOVE.captures(other) {
                parse_point(&captures).map(Command::Move)
            } else if let Some(captures) = CLICK.captures(other) {
                parse_point(&captures).map(|p| Command::Click(p.row, p.col))
            } else if let Some(captures) = SCROLL.captures(other) {
                let count = match captures.name("count").map(|c| c.as_str().parse::<i32>()) {
                    None => 1,
                    Some(Ok(count)) => count,
                    Some(Err(_)) => {
                        println!("invalid scroll count {}", &captures["count"]);
                        return None;
                    }
                };
                let diff = match &captures["dir"] {
                    "up" | "north" | "u" | "n" => GridPoint::new(-count, 0),
                    "down" | "south" | "d" | "s" => GridPoint::new(count, 0),
                    "left" | "west" | "l" | "w" => GridPoint::new(0, -count),
                    "right" | "east" | "r" | "e" => GridPoint::new(0, count),
                    other => {
                        println!(
                            "invalid direction {}, choose \"up\", \"down\", \"left\", or \"right\"",
                            other
                        );
                        return None;
                    }
                };
                Some(Command::Scroll(diff))
            } else {
                println!("Invalid command \"{}\". Use '?' for help", other);
                None
            }
        }
    }
}

fn print_help() {
    println!(
        "Available Commands:
    select <row>,<col>      select the ship at the given hex and show where it can move.
    move <row>,<col>        move the selected ship to a marked hex.
    click <row>,<col>       click a character of the screen, using the ruler positions.
        Clicking a marked hex moves the selected ship there, clicking a ship selects it.
    scroll <dir> [<count>]  scroll the view \"up\", \"down\", \"left\", or \"right\".
    deselect                drop the selection.
    show                    print the view again.
    quit                    leave the game."
    );
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
