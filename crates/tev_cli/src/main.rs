use clap::{Parser, Subcommand};
use tev_frames::{equ2gal, gal2equ, separation_deg};

#[derive(Parser)]
#[command(name = "tev", about = "Celestial coordinate transform CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Galactic to Equatorial J2000
    #[command(name = "gal2equ")]
    Gal2Equ {
        /// Galactic longitude in degrees
        l: f64,
        /// Galactic latitude in degrees
        b: f64,
    },
    /// Equatorial J2000 to Galactic
    #[command(name = "equ2gal")]
    Equ2Gal {
        /// Right ascension in degrees
        ra: f64,
        /// Declination in degrees
        dec: f64,
    },
    /// Angular separation between two equatorial positions
    Separation {
        /// Right ascension of the first position, degrees
        ra1: f64,
        /// Declination of the first position, degrees
        dec1: f64,
        /// Right ascension of the second position, degrees
        ra2: f64,
        /// Declination of the second position, degrees
        dec2: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gal2Equ { l, b } => {
            let e = gal2equ(l, b);
            println!("ra  = {:.5} deg", e.ra_deg);
            println!("dec = {:.5} deg", e.dec_deg);
        }
        Commands::Equ2Gal { ra, dec } => {
            let g = equ2gal(ra, dec);
            println!("l = {:.5} deg", g.l_deg);
            println!("b = {:.5} deg", g.b_deg);
        }
        Commands::Separation {
            ra1,
            dec1,
            ra2,
            dec2,
        } => {
            let s = separation_deg(ra1, dec1, ra2, dec2);
            println!("separation = {:.5} deg", s);
        }
    }
}
