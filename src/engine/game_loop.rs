use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::player::{PlayerInRound, PlayerStatus, Seat};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{RoundEventKind, RoundHistory};
use crate::engine::RandomSource;
use crate::eval::{compare, evaluate, Evaluation, Verdict, MAX_CARDS, MIN_CARDS};

/// Сколько карт сдаётся в раунде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundConfig {
    /// Карманные карты каждому игроку.
    pub hole_cards: usize,
    /// Общие карты на столе.
    pub board_cards: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            hole_cards: 2,
            board_cards: 5,
        }
    }
}

impl RoundConfig {
    /// Рука игрока (карманные + борд) должна оцениваться: 5..=7 карт.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.hole_cards == 0 {
            return Err(EngineError::InvalidConfig(
                "hole_cards должно быть больше нуля".into(),
            ));
        }
        let per_player = self.hole_cards + self.board_cards;
        if !(MIN_CARDS..=MAX_CARDS).contains(&per_player) {
            return Err(EngineError::InvalidConfig(format!(
                "hole_cards + board_cards = {per_player}, ожидается от {MIN_CARDS} до {MAX_CARDS}"
            )));
        }
        Ok(())
    }
}

/// Статус раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStatus {
    /// Карманные карты сданы, ждём решения игрока.
    InProgress,
    /// Раунд завершён (фолд или шоудаун).
    Finished,
}

/// Результат игрока на шоудауне.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerShowdown {
    pub seat: Seat,
    pub hole_cards: Vec<Card>,
    pub evaluation: Evaluation,
}

/// Краткое описание шоудауна.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShowdownSummary {
    pub round_id: u64,
    pub board: Vec<Card>,
    pub players: [PlayerShowdown; 2],
    pub verdict: Verdict,
}

impl ShowdownSummary {
    /// Победитель, `None` при ничьей.
    pub fn winner(&self) -> Option<Seat> {
        winner_of(self.verdict)
    }
}

/// Чем закончился раунд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundOutcome {
    Folded { folded: Seat, winner: Seat },
    Showdown(ShowdownSummary),
}

impl RoundOutcome {
    pub fn winner(&self) -> Option<Seat> {
        match self {
            RoundOutcome::Folded { winner, .. } => Some(*winner),
            RoundOutcome::Showdown(summary) => summary.winner(),
        }
    }
}

/// Состояние одного heads-up раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HeadsUpRound {
    pub round_id: u64,
    pub config: RoundConfig,
    pub deck: Deck,
    pub players: [PlayerInRound; 2],
    pub board: Vec<Card>,
    pub status: RoundStatus,
    pub history: RoundHistory,
}

/// Начать новый раунд:
/// - свежая колода, перемешанная `rng`;
/// - каждому игроку по `hole_cards` карт, по очереди (P1, P2, P1, P2).
pub fn start_round<R: RandomSource>(
    round_id: u64,
    config: RoundConfig,
    rng: &mut R,
) -> Result<HeadsUpRound, EngineError> {
    config.validate()?;

    let mut deck = Deck::standard_52();
    deck.shuffle(rng);

    let mut round = HeadsUpRound {
        round_id,
        config,
        deck,
        players: [
            PlayerInRound::new(Seat::First),
            PlayerInRound::new(Seat::Second),
        ],
        board: Vec::new(),
        status: RoundStatus::InProgress,
        history: RoundHistory::new(),
    };
    round.history.push(RoundEventKind::RoundStarted { round_id });

    deal_hole_cards(&mut round)?;

    log::info!("round {round_id}: hole cards dealt");
    Ok(round)
}

fn deal_hole_cards(round: &mut HeadsUpRound) -> Result<(), EngineError> {
    for _ in 0..round.config.hole_cards {
        for player in round.players.iter_mut() {
            let card = round.deck.draw()?;
            player.hand.push(card);
        }
    }

    for player in &round.players {
        let cards = player.hand.to_vec();
        log::debug!(
            "round {}: {} holds {}",
            round.round_id,
            player.seat,
            codes(&cards)
        );
        round.history.push(RoundEventKind::HoleCardsDealt {
            seat: player.seat,
            cards,
        });
    }
    Ok(())
}

impl HeadsUpRound {
    pub fn player(&self, seat: Seat) -> &PlayerInRound {
        &self.players[seat.index()]
    }

    pub fn is_finished(&self) -> bool {
        self.status == RoundStatus::Finished
    }

    /// Игрок сбрасывает карты, соперник выигрывает без вскрытия.
    pub fn fold(&mut self, seat: Seat) -> Result<RoundOutcome, EngineError> {
        self.ensure_in_progress()?;

        self.players[seat.index()].status = PlayerStatus::Folded;
        self.history.push(RoundEventKind::Folded { seat });

        let winner = seat.opponent();
        self.finish(verdict_for(winner));
        log::info!("round {}: {seat} folded, {winner} wins", self.round_id);

        Ok(RoundOutcome::Folded {
            folded: seat,
            winner,
        })
    }

    /// Сдать борд, оценить обе руки и определить победителя.
    ///
    /// При ошибке раунд остаётся как был: борд не сдан, колода и история
    /// не изменились.
    pub fn showdown(&mut self) -> Result<RoundOutcome, EngineError> {
        self.ensure_in_progress()?;
        self.config.validate()?;

        let board = self.deck.draw_n(self.config.board_cards)?;
        let revealed = self
            .reveal(Seat::First, &board)
            .and_then(|first| Ok([first, self.reveal(Seat::Second, &board)?]));
        let [first, second] = match revealed {
            Ok(players) => players,
            Err(err) => {
                // Вернуть борд на верх колоды в исходном порядке.
                self.deck.cards.extend(board.into_iter().rev());
                return Err(err);
            }
        };

        log::debug!("round {}: board {}", self.round_id, codes(&board));
        self.board = board.clone();
        self.history.push(RoundEventKind::BoardDealt {
            cards: board.clone(),
        });
        for player in [&first, &second] {
            self.history.push(RoundEventKind::ShowdownReveal {
                seat: player.seat,
                hole_cards: player.hole_cards.clone(),
                evaluation: player.evaluation.clone(),
            });
        }

        let verdict = compare(&first.evaluation, &second.evaluation);

        self.finish(verdict);
        log::info!(
            "round {}: {} vs {} -> {:?}",
            self.round_id,
            first.evaluation,
            second.evaluation,
            verdict
        );

        Ok(RoundOutcome::Showdown(ShowdownSummary {
            round_id: self.round_id,
            board,
            players: [first, second],
            verdict,
        }))
    }

    fn reveal(&self, seat: Seat, board: &[Card]) -> Result<PlayerShowdown, EngineError> {
        let player = &self.players[seat.index()];
        let hole_cards = player.hand.to_vec();
        let evaluation = evaluate(&player.combined_with(board))?;

        Ok(PlayerShowdown {
            seat,
            hole_cards,
            evaluation,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.is_finished() {
            return Err(EngineError::RoundFinished);
        }
        Ok(())
    }

    fn finish(&mut self, verdict: Verdict) {
        self.status = RoundStatus::Finished;
        self.history.push(RoundEventKind::RoundFinished {
            round_id: self.round_id,
            verdict,
        });
    }
}

fn verdict_for(winner: Seat) -> Verdict {
    match winner {
        Seat::First => Verdict::FirstWins,
        Seat::Second => Verdict::SecondWins,
    }
}

fn winner_of(verdict: Verdict) -> Option<Seat> {
    match verdict {
        Verdict::FirstWins => Some(Seat::First),
        Verdict::SecondWins => Some(Seat::Second),
        Verdict::Tie => None,
    }
}

fn codes(cards: &[Card]) -> String {
    cards.iter().map(Card::code).collect::<Vec<_>>().join(" ")
}
