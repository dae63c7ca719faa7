use anyhow::{ensure, Result};
use clap::Parser;
use log::info;
use poker_combos::deck::{End, Variant};
use poker_combos::evaluator::{self, Combo};
use poker_combos::table::{HandId, PileId, Table};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Parser)]
#[command(version = poker_combos::VERSION, about = "Deal a showdown and name the winner")]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=10))]
    players: u8,
    /// Private cards dealt to each player.
    #[clap(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=7))]
    hole: u8,
    /// Community cards on the board.
    #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=7))]
    community: u8,
    /// Shuffle passes before each deal.
    #[clap(long, default_value_t = 1)]
    passes: usize,
    /// Seed for a reproducible shuffle.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of rounds; the discard pile goes back under the deck between rounds.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    rounds: u16,
    /// Use a lowball deck, where the Ace ranks below the Two.
    #[clap(long)]
    lowball: bool,
}

struct Session {
    table: Table,
    deck: PileId,
    discard: PileId,
    board: HandId,
    players: Vec<HandId>,
}

impl Session {
    fn new(cli: &Cli) -> Result<Self> {
        let mut table = Table::new();
        let deck = table.add_pile();
        let discard = table.add_pile();
        let variant = if cli.lowball { Variant::Lowball } else { Variant::Standard };
        table.pile_mut(deck)?.populate(variant);

        let board = table.add_hand(None, Some(deck), Some(discard));
        let players = (0..cli.players).map(|_| table.add_hand(Some(board), Some(deck), Some(discard))).collect();
        Ok(Self { table, deck, discard, board, players })
    }

    fn shuffle(&mut self, passes: usize, rng: Option<&mut ChaCha8Rng>) -> Result<()> {
        let pile = self.table.pile_mut(self.deck)?;
        match rng {
            Some(rng) => {
                for _ in 0..passes {
                    pile.shuffle_with(&mut *rng);
                }
            }
            None => pile.shuffle(passes),
        }
        Ok(())
    }

    fn play_round(&mut self, cli: &Cli) -> Result<()> {
        self.table.draw(self.board, cli.community as usize, None, End::Top)?;
        for &p in &self.players {
            self.table.draw(p, cli.hole as usize, None, End::Top)?;
            self.table.sort(p, true)?;
        }

        println!("Public: {}", self.table.hand(self.board)?);
        let mut combos: Vec<Combo> = Vec::with_capacity(self.players.len());
        let mut seats: Vec<usize> = Vec::with_capacity(self.players.len());
        for (seat, &p) in self.players.iter().enumerate() {
            println!("{}", self.table.hand(p)?);
            match self.table.evaluate_best(p)? {
                Some(combo) => {
                    println!("  {}", combo.describe());
                    combos.push(combo);
                    seats.push(seat);
                }
                None => println!("  nothing to play"),
            }
        }
        println!();

        let won = evaluator::winners(&combos);
        match won.as_slice() {
            [] => println!("No cards dealt"),
            [i] => {
                let hand = self.table.hand(self.players[seats[*i]])?;
                println!("Winner: {} with {}", hand, combos[*i]);
            }
            _ => println!("TIED"),
        }
        println!();

        self.table.scrap(self.board)?;
        self.table.scrap_all(&self.players)?;
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::builder().filter_level(log::LevelFilter::Warn).parse_default_env().format_timestamp_millis().init();

    let cli = Cli::parse();
    let needed = cli.players as usize * cli.hole as usize + cli.community as usize;
    ensure!(needed <= 52, "a deal of {needed} cards does not fit in one 52-card deck");

    let mut session = Session::new(&cli)?;
    let mut rng = cli.seed.map(ChaCha8Rng::seed_from_u64);

    for round in 1..=cli.rounds {
        info!("round {round}");
        session.shuffle(cli.passes, rng.as_mut())?;
        session.play_round(&cli)?;
        session.table.recycle(session.discard, session.deck)?;
    }
    Ok(())
}
