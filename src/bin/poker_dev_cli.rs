// src/bin/poker_dev_cli.rs
//
// Консольная heads-up игра: вы – Player 1, соперник – Player 2.
// Путь к JSON-конфигу можно передать первым аргументом или через POKER_CONFIG.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use holdem_showdown::domain::{Card, Seat};
use holdem_showdown::engine::{start_round, EngineError, HeadsUpRound, RoundConfig, RoundOutcome};
use holdem_showdown::eval::{describe_hand, Verdict};
use holdem_showdown::infra::{logging, GameConfig, GameRng};

/// Что делать после раунда.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum NextStep {
    PlayAgain,
    Quit,
}

fn main() -> ExitCode {
    let config = match GameConfig::resolve(std::env::args().nth(1).map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[CLI] {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log_level);
    log::info!("poker_dev_cli: config {:?}", config);

    let mut rng = GameRng::from_seed(config.seed);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut round_id: u64 = 0;
    loop {
        round_id += 1;
        match play_round(round_id, config.round_config(), &mut rng, &mut input) {
            Ok(NextStep::PlayAgain) => continue,
            Ok(NextStep::Quit) => break,
            Err(e) => {
                eprintln!("[CLI] ОШИБКА в раунде {round_id}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("[CLI] Игра завершена.");
    ExitCode::SUCCESS
}

/// Один раунд: карманные карты, выбор игрока, фолд или шоудаун.
fn play_round(
    round_id: u64,
    config: RoundConfig,
    rng: &mut GameRng,
    input: &mut impl BufRead,
) -> Result<NextStep, EngineError> {
    let mut round = start_round(round_id, config, rng)?;

    println!();
    println!("================ ROUND {round_id} =================");
    println!("Ваша рука:");
    print_cards(&round.player(Seat::First).hand.to_vec());

    let choice = ask(input, "Ваш выбор:\n1. Продолжить\n2. Пас");
    match act(&mut round, choice)? {
        Some(outcome) => report(&outcome),
        None => println!("Неизвестный выбор, раунд пропущен."),
    }

    match ask(input, "Продолжить игру?\n1. Да\n2. Нет") {
        Some(2) | None => Ok(NextStep::Quit),
        Some(_) => Ok(NextStep::PlayAgain),
    }
}

/// 1 – шоудаун, 2 – пас. Любой другой ответ раунд не разыгрывает.
fn act(
    round: &mut HeadsUpRound,
    choice: Option<u32>,
) -> Result<Option<RoundOutcome>, EngineError> {
    match choice {
        Some(1) => round.showdown().map(Some),
        Some(2) => round.fold(Seat::First).map(Some),
        _ => Ok(None),
    }
}

fn report(outcome: &RoundOutcome) {
    match outcome {
        RoundOutcome::Folded { winner, .. } => {
            println!("Вы сбросили карты. Победил {winner}.");
        }
        RoundOutcome::Showdown(summary) => {
            println!("Карты на столе:");
            print_cards(&summary.board);
            for p in &summary.players {
                println!(
                    "Рука {} ({}) + стол: {}",
                    p.seat,
                    codes(&p.hole_cards),
                    describe_hand(&p.evaluation)
                );
            }
            match summary.verdict {
                Verdict::FirstWins | Verdict::SecondWins => {
                    if let Some(winner) = summary.winner() {
                        println!("Победил {winner}!");
                    }
                }
                Verdict::Tie => println!("Ничья!"),
            }
        }
    }
}

/// Вывести вопрос и прочитать число. `None` – конец ввода.
fn ask(input: &mut impl BufRead, prompt: &str) -> Option<u32> {
    println!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().parse().unwrap_or(0)),
    }
}

fn print_cards(cards: &[Card]) {
    for card in cards {
        println!("  {card} (очки: {})", card.points());
    }
}

fn codes(cards: &[Card]) -> String {
    cards.iter().map(Card::code).collect::<Vec<_>>().join(" ")
}
