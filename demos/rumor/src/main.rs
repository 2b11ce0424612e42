//! rumor — a rumor spreading through a random weighted social network.
//!
//! Every person has `--friends` outgoing edges with weights in `[0.05, 1)`.
//! A person believes the rumor with probability equal to the weight of the
//! edge it arrived on, then retells it to all friends after a random wait of
//! up to `--max-wait-hours`.  The originator retells it once a day.
//!
//! Ids, edges and every draw come from `--seed`, so runs replay exactly.
//! Set `RUST_LOG=rg_sim=debug` to watch every delivery.

mod person;

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{TimeDelta, TimeZone, Utc};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rg_core::{AgentId, IdGenerator, Message, SimConfig, SimTime};
use rg_messages::RegularEventMessage;
use rg_sim::{SimBuilder, SimObserver};
use rg_social::{DirectedWeightedNetwork, SocialMessageSpec, SocialMessage, SocialNetwork};
use tracing::info;
use tracing_subscriber::EnvFilter;

use person::{Person, Rumor};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rumor")]
#[command(about = "Spread a rumor through a seeded weighted social network", long_about = None)]
struct Args {
    /// Master seed for ids, edges and beliefs
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Number of people
    #[arg(short, long, default_value = "200")]
    people: usize,

    /// Outgoing edges per person
    #[arg(short, long, default_value = "4")]
    friends: usize,

    /// Simulated days
    #[arg(short, long, default_value = "14")]
    days: i64,

    /// Longest wait before retelling, in hours
    #[arg(long, default_value = "12")]
    max_wait_hours: i64,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts deliveries per simulated day.
struct DailyTally {
    start:  SimTime,
    social: Vec<usize>,
    other:  Vec<usize>,
}

impl DailyTally {
    fn new(start: SimTime, days: i64) -> Self {
        let days = usize::try_from(days).unwrap_or(0) + 1;
        Self { start, social: vec![0; days], other: vec![0; days] }
    }

    fn day_of(&self, time: SimTime) -> usize {
        usize::try_from((time - self.start).num_days()).unwrap_or(0)
    }
}

impl SimObserver for DailyTally {
    fn on_delivered(&mut self, time: SimTime, message: &dyn Message) {
        let day = self.day_of(time).min(self.social.len() - 1);
        if message.is::<SocialMessage>() {
            self.social[day] += 1;
        } else {
            self.other[day] += 1;
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rumor=info,rg_sim=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    anyhow::ensure!(args.people >= 2, "need at least two people");
    anyhow::ensure!(args.friends < args.people, "--friends must be below --people");
    anyhow::ensure!(args.days > 0, "--days must be positive");

    let start = Utc
        .with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .context("invalid start time")?;
    let end = start + TimeDelta::days(args.days);
    let max_wait = TimeDelta::hours(args.max_wait_hours.max(1));

    // 1. Seeded ids and per-person RNG streams.
    let mut ids = IdGenerator::new(args.seed);
    let people: Vec<AgentId> = (0..args.people).map(|_| ids.agent_id()).collect();
    let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_mul(0x9e37_79b9_7f4a_7c15));

    // 2. Random friendships.
    let mut network = DirectedWeightedNetwork::new();
    for (i, &person) in people.iter().enumerate() {
        for j in sample(&mut rng, args.people - 1, args.friends) {
            let friend = people[if j >= i { j + 1 } else { j }];
            network.add_edge(person, friend, rng.gen_range(0.05..1.0));
        }
    }
    info!(
        people = network.agent_count(),
        friendships = network.edge_count(),
        "built social network"
    );

    // 3. Agents.  people[0] starts the rumor.
    let origin = people[0];
    let rumor: Arc<dyn Message> = Arc::new(Rumor::new(origin, "the mayor is a lizard"));
    let agents = people.iter().map(|&id| {
        let person = Person::new(id, SmallRng::seed_from_u64(rng.r#gen()), max_wait);
        let person = if id == origin { person.originator(Arc::clone(&rumor), start) } else { person };
        Box::new(person) as Box<dyn rg_agent::Agent>
    });
    let agents: Vec<_> = agents.collect();

    let mut sim = SimBuilder::new(SimConfig::new(start, end))
        .social_network(network)
        .agents(agents)
        .build()?;

    // 4. Seed the first telling and the originator's daily retelling.
    sim.send_social_messages(&SocialMessageSpec::from_shared(origin, Arc::clone(&rumor)))?;
    let daily = RegularEventMessage::create_and_schedule(
        &RegularEventMessage::new(origin),
        TimeDelta::days(1),
        start + TimeDelta::days(1),
        end,
        &mut sim,
    )?;
    info!(daily, "scheduled daily retelling");

    // 5. Run.
    let mut tally = DailyTally::new(start, args.days);
    let summary = sim.run(&mut tally)?;

    // 6. Report.
    let mut first_heard: Vec<SimTime> = people
        .iter()
        .filter_map(|&id| sim.agent::<Person>(id).and_then(Person::heard_at))
        .collect();
    first_heard.sort_unstable();
    let retellings: usize = people
        .iter()
        .filter_map(|&id| sim.agent::<Person>(id).map(Person::retold))
        .sum();

    println!();
    println!("=== rumor — seed {} ===", args.seed);
    println!(
        "Delivered {} messages in {} batches; clock stopped at {}",
        summary.delivered, summary.batches, summary.final_time
    );
    println!(
        "{} of {} people believe the rumor ({} retellings)",
        first_heard.len(),
        args.people,
        retellings
    );
    println!();
    println!("{:>4}  {:>8}  {:>8}  {:>9}", "day", "social", "other", "believers");
    for day in 0..tally.social.len() {
        let cutoff = start + TimeDelta::days(i64::try_from(day).unwrap_or(i64::MAX) + 1);
        let believers = first_heard.partition_point(|&t| t < cutoff);
        println!(
            "{:>4}  {:>8}  {:>8}  {:>9}",
            day, tally.social[day], tally.other[day], believers
        );
    }
    Ok(())
}
