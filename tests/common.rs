#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::config::{CityCatalog, Config};
use bikeshare::core::Session;
use bikeshare::data::DataLoader;
use bikeshare::ui::Console;
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-06-05 08:10:00,2017-06-05 08:11:00,60,A,X,Subscriber,Male,1990.0
2,2017-06-05 08:30:00,2017-06-05 08:32:00,120,A,Y,Subscriber,Female,1985.0
3,2017-06-12 17:00:00,2017-06-12 17:03:00,180,B,X,Customer,,
4,2017-01-03 09:00:00,2017-01-03 09:05:00,300,A,X,Subscriber,Male,1990.0
5,2017-03-10 08:45:00,2017-03-10 08:55:00,600,C,X,Subscriber,Male,1970.0
6,2017-06-07 18:00:00,2017-06-07 18:04:00,240,B,A,Customer,Female,2001.0
7,2017-02-06 07:15:00,2017-02-06 07:16:30,90,C,B,Subscriber,Male,1990.0
";

pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
10,2017-04-02 10:00:00,2017-04-02 10:10:00,600,Broadway & W 60 St,9 Ave & W 45 St,Subscriber,Male,1980.0
11,2017-04-02 11:00:00,2017-04-02 11:05:00,300,Broadway & W 60 St,E 17 St & Broadway,,,
12,2017-05-30 10:30:00,2017-05-30 10:40:00,600,9 Ave & W 45 St,Broadway & W 60 St,Customer,Female,
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
20,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
21,2017-03-11 10:01:00,2017-03-11 10:31:00,1800.0,Lincoln Memorial,Jefferson Memorial,Customer
22,2017-05-30 17:40:00,2017-05-30 17:50:00,600.0,15th & K St NW,14th & Belmont St NW,Subscriber
";

/// Rows whose demographic cells use placeholder tokens instead of blanks.
pub const PLACEHOLDER_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-06-05 08:10:00,2017-06-05 08:11:00,60,A,X,Subscriber,Male,1990.0
2,2017-06-05 08:30:00,2017-06-05 08:32:00,120,A,Y,Customer,NaN,NaN
3,2017-06-06 09:00:00,2017-06-06 09:05:00,300,B,X,None,N/A,NA
4,2017-06-07 10:00:00,2017-06-07 10:02:00,120,B,A,Subscriber,Female,null
";

pub fn bikeshare() -> Command {
    let mut cmd = cargo_bin_cmd!("bikeshare");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a fresh data directory in the system temp dir holding the three
/// city fixtures.
pub fn fixture_dir(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_bikeshare", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create fixture dir");

    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago");
    fs::write(dir.join("new_york_city.csv"), NEW_YORK_CITY_CSV).expect("write nyc");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington");
    dir
}

/// A config path that does not exist, so defaults are used.
pub fn no_config(dir: &Path) -> String {
    dir.join("absent.conf").to_string_lossy().to_string()
}

pub fn loader(dir: &Path) -> DataLoader {
    DataLoader::new(CityCatalog::in_dir(dir))
}

/// Plain-output config without timing lines, for exact assertions.
pub fn quiet_config() -> Config {
    Config {
        show_timing: false,
        color: false,
        ..Config::default()
    }
}

/// Run a whole interactive session over `input`, returning what was printed.
pub fn run_session(dir: &Path, input: &str) -> (bikeshare::errors::AppResult<()>, String) {
    let cfg = quiet_config();
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut session = Session::new(&cfg, loader(dir), console);

    let result = session.run();
    let out = String::from_utf8(session.into_console().into_output()).expect("utf8 output");
    (result, out)
}
