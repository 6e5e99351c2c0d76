// Session coordinator for the single game table.
//
// `Table` owns the seat registry and the position oracle together and is the
// only code that mutates either. Every inbound event maps to one `handle_*`
// call, and each call returns the frames it wants delivered instead of
// sending them itself. The actor in `server.rs` serializes the calls and does
// the delivery.
//
// Rejections (wrong seat, wrong turn, finished game, illegal or malformed
// move, oracle fault) only ever produce a private frame for the requester.

use log::{info, warn};

use crate::config::TableConfig;
use crate::error::{MoveError, ResetError};
use crate::game::utils::{check_message, game_over_payload, side_to_string};
use crate::game::{ChessOracle, PositionOracle};
use crate::models::{
    ClientMessage, ConnectionId, MoveRequest, PositionStatus, Role, ServerMessage, Side,
    TableSnapshot, TableStatus, Termination,
};
use crate::table::registry::SeatRegistry;

/// A frame the coordinator wants delivered.
#[derive(Debug, Clone, PartialEq)]
pub enum Outgoing {
    /// To one connection only.
    Private(ConnectionId, ServerMessage),
    /// To every connected party, the originator included.
    Broadcast(ServerMessage),
}

pub struct Table<O = ChessOracle> {
    oracle: O,
    seats: SeatRegistry,
    status: TableStatus,
    config: TableConfig,
}

impl Table<ChessOracle> {
    pub fn with_config(config: TableConfig) -> Self {
        Table::new(ChessOracle::new(), config)
    }
}

impl<O: PositionOracle> Table<O> {
    pub fn new(oracle: O, config: TableConfig) -> Self {
        Table {
            oracle,
            seats: SeatRegistry::new(),
            status: TableStatus::Ongoing,
            config,
        }
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn role_of(&self, id: ConnectionId) -> Role {
        self.seats.seat_of(id)
    }

    pub fn fen(&self) -> String {
        self.oracle.fen()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            white_seated: self.seats.occupant(Side::White).is_some(),
            black_seated: self.seats.occupant(Side::Black).is_some(),
            observers: self.seats.observer_count(),
            fen: self.oracle.fen(),
            turn: self.oracle.side_to_move(),
            status: self.status.label(),
            winner: match self.status {
                TableStatus::Terminated(termination) => termination.winner(),
                TableStatus::Ongoing => None,
            },
        }
    }

    /// Seat the connection (or make it an observer) and tell it, and only
    /// it, what it got.
    pub fn handle_connect(&mut self, id: ConnectionId) -> Vec<Outgoing> {
        let role = self.seats.assign(id);
        info!("Connection {} assigned role {:?}", id, role);

        vec![Outgoing::Private(
            id,
            ServerMessage::Role {
                role,
                fen: self.oracle.fen(),
                turn: self.oracle.side_to_move(),
            },
        )]
    }

    /// Free whatever seat the connection held. The game carries on; the seat
    /// goes to the next connection that arrives.
    pub fn handle_disconnect(&mut self, id: ConnectionId) -> Vec<Outgoing> {
        match self.seats.release(id) {
            Some(side) => {
                info!("Connection {} left the {} seat", id, side_to_string(side));
                if self.config.announce_vacated_seats {
                    vec![Outgoing::Broadcast(ServerMessage::SeatVacated { side })]
                } else {
                    Vec::new()
                }
            }
            None => {
                info!("Observer {} disconnected", id);
                Vec::new()
            }
        }
    }

    pub fn handle_command(&mut self, id: ConnectionId, command: ClientMessage) -> Vec<Outgoing> {
        match command {
            ClientMessage::Move(request) => self.handle_move_request(id, request),
            ClientMessage::NewGame => self.handle_new_game_request(id),
        }
    }

    pub fn handle_move_request(&mut self, id: ConnectionId, request: MoveRequest) -> Vec<Outgoing> {
        match self.try_move(id, &request) {
            Ok(outgoing) => outgoing,
            Err(e) => {
                warn!("Rejected move {:?} from {}: {}", request, id, e);
                vec![Outgoing::Private(id, ServerMessage::InvalidMove(request))]
            }
        }
    }

    pub fn handle_new_game_request(&mut self, id: ConnectionId) -> Vec<Outgoing> {
        match self.try_reset(id) {
            Ok(outgoing) => outgoing,
            Err(e) => {
                warn!("Rejected new game request from {}: {}", id, e);
                vec![Outgoing::Private(id, ServerMessage::error(e.to_string()))]
            }
        }
    }

    /// Only the seat whose colour is to move may move, and only while the
    /// game is running. Returns the side that is about to move.
    fn authorize(&self, id: ConnectionId) -> Result<Side, MoveError> {
        if let TableStatus::Terminated(_) = self.status {
            return Err(MoveError::GameOver);
        }

        let turn = self.oracle.side_to_move();
        let role = self.seats.seat_of(id);
        if role.seat() != Some(turn) {
            return Err(MoveError::Unauthorized { role, turn });
        }
        Ok(turn)
    }

    fn try_move(&mut self, id: ConnectionId, request: &MoveRequest) -> Result<Vec<Outgoing>, MoveError> {
        let mover = self.authorize(id)?;
        self.oracle.apply_if_legal(request)?;
        info!(
            "{} played {}-{}",
            side_to_string(mover),
            request.from,
            request.to
        );

        let mut outgoing = vec![
            Outgoing::Broadcast(ServerMessage::Move(request.clone())),
            Outgoing::Broadcast(ServerMessage::BoardState {
                fen: self.oracle.fen(),
            }),
        ];

        let position = self.oracle.status();
        if let Some(termination) = termination_of(position, mover) {
            let payload = game_over_payload(termination);
            info!("Game over: {}", payload.message);
            self.status = TableStatus::Terminated(termination);
            outgoing.push(Outgoing::Broadcast(ServerMessage::GameOver(payload)));
            return Ok(outgoing);
        }

        let turn = self.oracle.side_to_move();
        if position == PositionStatus::Check {
            outgoing.push(Outgoing::Broadcast(ServerMessage::Check {
                side: turn,
                message: check_message(turn),
            }));
        }
        outgoing.push(Outgoing::Broadcast(ServerMessage::Turn { side: turn }));
        Ok(outgoing)
    }

    fn try_reset(&mut self, id: ConnectionId) -> Result<Vec<Outgoing>, ResetError> {
        if self.config.seated_reset_only && !self.seats.seat_of(id).is_seated() {
            return Err(ResetError::NotSeated);
        }

        self.oracle.reset();
        self.status = TableStatus::Ongoing;
        info!("New game started by {}", id);

        Ok(vec![
            Outgoing::Broadcast(ServerMessage::NewGame),
            Outgoing::Broadcast(ServerMessage::BoardState {
                fen: self.oracle.fen(),
            }),
            Outgoing::Broadcast(ServerMessage::Turn {
                side: self.oracle.side_to_move(),
            }),
        ])
    }
}

/// Map a finished position to how the game ended. `mover` delivered the
/// last move, so on checkmate it is the winner.
fn termination_of(position: PositionStatus, mover: Side) -> Option<Termination> {
    match position {
        PositionStatus::Checkmate => Some(Termination::Checkmate { winner: mover }),
        PositionStatus::Stalemate => Some(Termination::Stalemate),
        PositionStatus::Draw(kind) => Some(Termination::Draw(kind)),
        PositionStatus::Ongoing | PositionStatus::Check => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrawKind, GameOverReason};

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    const FOOLS_MATE: [(&str, &str); 4] = [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")];

    // Sam Loyd's ten-move stalemate. Ply 11 (Qxd7+) gives check.
    const LOYD_STALEMATE: [(&str, &str); 19] = [
        ("e2", "e3"),
        ("a7", "a5"),
        ("d1", "h5"),
        ("a8", "a6"),
        ("h5", "a5"),
        ("h7", "h5"),
        ("h2", "h4"),
        ("a6", "h6"),
        ("a5", "c7"),
        ("f7", "f6"),
        ("c7", "d7"),
        ("e8", "f7"),
        ("d7", "b7"),
        ("d8", "d3"),
        ("b7", "b8"),
        ("d3", "h7"),
        ("b8", "c8"),
        ("f7", "g6"),
        ("c8", "e6"),
    ];

    struct Seated {
        table: Table,
        white: ConnectionId,
        black: ConnectionId,
        observer: ConnectionId,
    }

    fn seated(config: TableConfig) -> Seated {
        let mut table = Table::with_config(config);
        let white = ConnectionId::new();
        let black = ConnectionId::new();
        let observer = ConnectionId::new();
        table.handle_connect(white);
        table.handle_connect(black);
        table.handle_connect(observer);
        Seated {
            table,
            white,
            black,
            observer,
        }
    }

    impl Seated {
        fn seat(&self, side: Side) -> ConnectionId {
            match side {
                Side::White => self.white,
                Side::Black => self.black,
            }
        }

        /// Play a scripted game, alternating seats, and return the frames
        /// produced by the last move.
        fn play(&mut self, moves: &[(&str, &str)]) -> Vec<Outgoing> {
            let mut last = Vec::new();
            let mut side = self.table.oracle.side_to_move();
            for (from, to) in moves {
                let id = self.seat(side);
                last = self.table.handle_move_request(id, MoveRequest::new(from, to));
                assert!(
                    !matches!(last.as_slice(), [Outgoing::Private(_, ServerMessage::InvalidMove(_))]),
                    "{}-{} was rejected",
                    from,
                    to
                );
                side = side.opponent();
            }
            last
        }
    }

    fn broadcasts(outgoing: &[Outgoing]) -> Vec<ServerMessage> {
        outgoing
            .iter()
            .map(|o| match o {
                Outgoing::Broadcast(msg) => msg.clone(),
                Outgoing::Private(id, msg) => panic!("unexpected private {:?} to {}", msg, id),
            })
            .collect()
    }

    fn assert_rejected(outgoing: &[Outgoing], id: ConnectionId, request: &MoveRequest) {
        assert_eq!(
            outgoing,
            &[Outgoing::Private(id, ServerMessage::InvalidMove(request.clone()))]
        );
    }

    #[test]
    fn connect_sends_only_a_private_role() {
        let mut table = Table::with_config(TableConfig::default());
        let roles: Vec<Role> = (0..4)
            .map(|_| {
                let id = ConnectionId::new();
                let outgoing = table.handle_connect(id);
                match outgoing.as_slice() {
                    [Outgoing::Private(to, ServerMessage::Role { role, fen, turn })] => {
                        assert_eq!(*to, id);
                        assert_eq!(fen, START_FEN);
                        assert_eq!(*turn, Side::White);
                        *role
                    }
                    other => panic!("unexpected frames {:?}", other),
                }
            })
            .collect();

        assert_eq!(roles, vec![Role::White, Role::Black, Role::Observer, Role::Observer]);
    }

    #[test]
    fn late_joiner_sees_the_live_position() {
        let mut s = seated(TableConfig::default());
        s.play(&[("e2", "e4")]);
        let late = ConnectionId::new();
        match s.table.handle_connect(late).as_slice() {
            [Outgoing::Private(_, ServerMessage::Role { role, fen, turn })] => {
                assert_eq!(*role, Role::Observer);
                assert_eq!(fen, &s.table.fen());
                assert_eq!(*turn, Side::Black);
            }
            other => panic!("unexpected frames {:?}", other),
        }
    }

    #[test]
    fn accepted_move_broadcasts_move_board_and_turn() {
        let mut s = seated(TableConfig::default());
        let request = MoveRequest::new("e2", "e4");
        let outgoing = s.table.handle_move_request(s.white, request.clone());

        assert_eq!(
            broadcasts(&outgoing),
            vec![
                ServerMessage::Move(request),
                ServerMessage::BoardState {
                    fen: "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1".to_string()
                },
                ServerMessage::Turn { side: Side::Black },
            ]
        );
    }

    #[test]
    fn broadcast_board_matches_oracle_after_every_move() {
        let mut s = seated(TableConfig::default());
        let mut side = Side::White;
        for (from, to) in LOYD_STALEMATE.iter().take(10) {
            let id = s.seat(side);
            let outgoing = s.table.handle_move_request(id, MoveRequest::new(from, to));
            let fen = broadcasts(&outgoing)
                .into_iter()
                .find_map(|m| match m {
                    ServerMessage::BoardState { fen } => Some(fen),
                    _ => None,
                })
                .expect("board state broadcast");
            assert_eq!(fen, s.table.fen());
            side = side.opponent();
        }
    }

    #[test]
    fn wrong_seat_cannot_move() {
        let mut s = seated(TableConfig::default());
        let before = s.table.fen();

        let request = MoveRequest::new("e7", "e5");
        let outgoing = s.table.handle_move_request(s.black, request.clone());
        assert_rejected(&outgoing, s.black, &request);

        // Even a move that would be legal for White
        let request = MoveRequest::new("e2", "e4");
        let outgoing = s.table.handle_move_request(s.black, request.clone());
        assert_rejected(&outgoing, s.black, &request);

        assert_eq!(s.table.fen(), before);
    }

    #[test]
    fn observer_cannot_move() {
        let mut s = seated(TableConfig::default());
        let before = s.table.fen();
        let request = MoveRequest::new("e2", "e4");
        let outgoing = s.table.handle_move_request(s.observer, request.clone());
        assert_rejected(&outgoing, s.observer, &request);
        assert_eq!(s.table.fen(), before);
    }

    #[test]
    fn illegal_and_malformed_moves_are_echoed_privately() {
        let mut s = seated(TableConfig::default());
        let before = s.table.fen();
        for request in [
            MoveRequest::new("e2", "e5"),
            MoveRequest::new("", ""),
            MoveRequest::new("e2", "x4"),
            MoveRequest::new("e2zzz", "e4!!"),
            MoveRequest::new("e2", "e4").with_promotion("z"),
        ] {
            let outgoing = s.table.handle_move_request(s.white, request.clone());
            assert_rejected(&outgoing, s.white, &request);
        }
        assert_eq!(s.table.fen(), before);
        assert_eq!(s.table.status(), TableStatus::Ongoing);
    }

    #[test]
    fn mistyped_move_frame_is_echoed_as_invalid_move() {
        let mut s = seated(TableConfig::default());
        let command: ClientMessage =
            serde_json::from_str(r#"{"type":"move","from":5,"to":"e4"}"#).unwrap();
        let outgoing = s.table.handle_command(s.white, command);
        assert_rejected(&outgoing, s.white, &MoveRequest::new("5", "e4"));
        assert_eq!(s.table.fen(), START_FEN);
    }

    #[test]
    fn fools_mate_ends_the_game_for_black() {
        let mut s = seated(TableConfig::default());
        let outgoing = s.play(&FOOLS_MATE);
        let frames = broadcasts(&outgoing);

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], ServerMessage::Move(MoveRequest::new("d8", "h4")));
        let game_overs: Vec<_> = frames
            .iter()
            .filter_map(|m| match m {
                ServerMessage::GameOver(payload) => Some(payload),
                _ => None,
            })
            .collect();
        assert_eq!(game_overs.len(), 1);
        assert_eq!(game_overs[0].reason, GameOverReason::Checkmate);
        assert_eq!(game_overs[0].winner, Some(Side::Black));
        assert_eq!(game_overs[0].message, "Black wins by checkmate!");

        assert_eq!(
            s.table.status(),
            TableStatus::Terminated(Termination::Checkmate { winner: Side::Black })
        );
        assert!(!frames.iter().any(|m| matches!(m, ServerMessage::Turn { .. })));
    }

    #[test]
    fn loyd_stalemate_has_no_winner() {
        let mut s = seated(TableConfig::default());
        let outgoing = s.play(&LOYD_STALEMATE);
        match broadcasts(&outgoing).last() {
            Some(ServerMessage::GameOver(payload)) => {
                assert_eq!(payload.reason, GameOverReason::Stalemate);
                assert_eq!(payload.winner, None);
                assert!(!payload.celebration);
            }
            other => panic!("expected game over, got {:?}", other),
        }
        assert_eq!(s.table.status(), TableStatus::Terminated(Termination::Stalemate));
    }

    #[test]
    fn check_is_announced_before_the_turn() {
        let mut s = seated(TableConfig::default());
        let outgoing = s.play(&LOYD_STALEMATE[..11]);
        let frames = broadcasts(&outgoing);
        assert_eq!(
            &frames[2..],
            &[
                ServerMessage::Check {
                    side: Side::Black,
                    message: "Black is in check!".to_string()
                },
                ServerMessage::Turn { side: Side::Black },
            ]
        );
    }

    #[test]
    fn finished_game_rejects_moves_until_reset() {
        let mut s = seated(TableConfig::default());
        s.play(&FOOLS_MATE);
        let final_fen = s.table.fen();

        // White is nominally to move, but the game is over
        let request = MoveRequest::new("a2", "a3");
        let outgoing = s.table.handle_move_request(s.white, request.clone());
        assert_rejected(&outgoing, s.white, &request);
        let outgoing = s.table.handle_move_request(s.black, request.clone());
        assert_rejected(&outgoing, s.black, &request);
        assert_eq!(s.table.fen(), final_fen);

        let outgoing = s.table.handle_new_game_request(s.black);
        assert_eq!(
            broadcasts(&outgoing),
            vec![
                ServerMessage::NewGame,
                ServerMessage::BoardState {
                    fen: START_FEN.to_string()
                },
                ServerMessage::Turn { side: Side::White },
            ]
        );
        assert_eq!(s.table.status(), TableStatus::Ongoing);

        // Seats survive the reset
        assert_eq!(s.table.role_of(s.white), Role::White);
        assert_eq!(s.table.role_of(s.black), Role::Black);
        s.play(&[("a2", "a3")]);
    }

    #[test]
    fn observers_may_reset_by_default() {
        let mut s = seated(TableConfig::default());
        s.play(&[("e2", "e4")]);
        let outgoing = s.table.handle_new_game_request(s.observer);
        assert_eq!(broadcasts(&outgoing)[0], ServerMessage::NewGame);
        assert_eq!(s.table.fen(), START_FEN);
    }

    #[test]
    fn seated_reset_only_turns_observers_away() {
        let mut s = seated(TableConfig {
            seated_reset_only: true,
            ..TableConfig::default()
        });
        s.play(&[("e2", "e4")]);
        let before = s.table.fen();

        let outgoing = s.table.handle_new_game_request(s.observer);
        assert_eq!(
            outgoing,
            vec![Outgoing::Private(
                s.observer,
                ServerMessage::error("only seated players may start a new game")
            )]
        );
        assert_eq!(s.table.fen(), before);

        let outgoing = s.table.handle_new_game_request(s.white);
        assert_eq!(broadcasts(&outgoing)[0], ServerMessage::NewGame);
    }

    #[test]
    fn disconnect_frees_the_seat_for_the_next_connection() {
        let mut s = seated(TableConfig::default());
        assert!(s.table.handle_disconnect(s.black).is_empty());

        let newcomer = ConnectionId::new();
        s.table.handle_connect(newcomer);
        assert_eq!(s.table.role_of(newcomer), Role::Black);
        assert_eq!(s.table.role_of(s.observer), Role::Observer);
    }

    #[test]
    fn game_stays_playable_with_a_vacant_seat() {
        let mut s = seated(TableConfig::default());
        s.table.handle_disconnect(s.black);
        s.play(&[("e2", "e4")]);

        // Nobody holds Black, so nobody can answer
        let request = MoveRequest::new("e7", "e5");
        let outgoing = s.table.handle_move_request(s.black, request.clone());
        assert_rejected(&outgoing, s.black, &request);
        assert_eq!(s.table.snapshot().turn, Side::Black);
    }

    #[test]
    fn vacated_seat_is_announced_when_enabled() {
        let mut s = seated(TableConfig {
            announce_vacated_seats: true,
            ..TableConfig::default()
        });
        assert_eq!(
            s.table.handle_disconnect(s.white),
            vec![Outgoing::Broadcast(ServerMessage::SeatVacated { side: Side::White })]
        );
        // Observers leaving is not news
        assert!(s.table.handle_disconnect(s.observer).is_empty());
    }

    #[test]
    fn repeated_disconnect_is_a_no_op() {
        let mut s = seated(TableConfig {
            announce_vacated_seats: true,
            ..TableConfig::default()
        });
        s.table.handle_disconnect(s.white);
        assert!(s.table.handle_disconnect(s.white).is_empty());
        assert!(s.table.handle_disconnect(ConnectionId::new()).is_empty());
        assert_eq!(s.table.role_of(s.black), Role::Black);
    }

    #[test]
    fn snapshot_reports_seats_and_outcome() {
        let mut s = seated(TableConfig::default());
        s.play(&FOOLS_MATE);
        let snapshot = s.table.snapshot();
        assert!(snapshot.white_seated && snapshot.black_seated);
        assert_eq!(snapshot.observers, 1);
        assert_eq!(snapshot.status, "checkmate");
        assert_eq!(snapshot.winner, Some(Side::Black));
    }

    #[test]
    fn commands_dispatch_to_handlers() {
        let mut s = seated(TableConfig::default());
        let outgoing = s
            .table
            .handle_command(s.white, ClientMessage::Move(MoveRequest::new("d2", "d4")));
        assert_eq!(broadcasts(&outgoing).len(), 3);
        let outgoing = s.table.handle_command(s.observer, ClientMessage::NewGame);
        assert_eq!(broadcasts(&outgoing)[0], ServerMessage::NewGame);
    }

    /// Oracle that accepts nothing and reports a fault instead.
    struct BrokenOracle(ChessOracle);

    impl PositionOracle for BrokenOracle {
        fn side_to_move(&self) -> Side {
            self.0.side_to_move()
        }
        fn apply_if_legal(&mut self, _request: &MoveRequest) -> Result<(), MoveError> {
            Err(MoveError::Oracle("engine exploded".to_string()))
        }
        fn status(&self) -> PositionStatus {
            self.0.status()
        }
        fn fen(&self) -> String {
            self.0.fen()
        }
        fn reset(&mut self) {
            self.0.reset()
        }
    }

    #[test]
    fn oracle_fault_is_downgraded_to_invalid_move() {
        let mut table = Table::new(BrokenOracle(ChessOracle::new()), TableConfig::default());
        let white = ConnectionId::new();
        table.handle_connect(white);

        let request = MoveRequest::new("e2", "e4");
        let outgoing = table.handle_move_request(white, request.clone());
        assert_rejected(&outgoing, white, &request);
        assert_eq!(table.fen(), START_FEN);
        assert_eq!(table.status(), TableStatus::Ongoing);
    }

    #[test]
    fn fifty_quiet_moves_end_the_game_in_a_draw() {
        let oracle = ChessOracle::from_fen("4k3/8/8/8/8/8/R7/4K3 w - - 99 80").unwrap();
        let mut table = Table::new(oracle, TableConfig::default());
        let white = ConnectionId::new();
        table.handle_connect(white);

        let outgoing = table.handle_move_request(white, MoveRequest::new("a2", "b2"));
        match broadcasts(&outgoing).last() {
            Some(ServerMessage::GameOver(payload)) => {
                assert_eq!(payload.reason, GameOverReason::Draw);
                assert_eq!(payload.draw, Some(DrawKind::FiftyMoveRule));
                assert_eq!(payload.winner, None);
            }
            other => panic!("expected game over, got {:?}", other),
        }
        assert_eq!(
            table.status(),
            TableStatus::Terminated(Termination::Draw(DrawKind::FiftyMoveRule))
        );
    }

    #[test]
    fn promotion_letter_does_not_block_a_pawn_push() {
        let mut s = seated(TableConfig::default());
        let request = MoveRequest::new("e2", "e4").with_promotion("q");
        let outgoing = s.table.handle_move_request(s.white, request.clone());
        assert_eq!(broadcasts(&outgoing)[0], ServerMessage::Move(request));
        assert_eq!(s.table.oracle.side_to_move(), Side::Black);
    }

    #[test]
    fn drawn_position_terminates_without_winner() {
        // Black's last piece can be taken, leaving bare kings
        let oracle = ChessOracle::from_fen("8/8/8/8/8/6k1/4n3/4K3 w - - 0 1").unwrap();
        let mut table = Table::new(oracle, TableConfig::default());
        let white = ConnectionId::new();
        table.handle_connect(white);

        let outgoing = table.handle_move_request(white, MoveRequest::new("e1", "e2"));
        match broadcasts(&outgoing).last() {
            Some(ServerMessage::GameOver(payload)) => {
                assert_eq!(payload.reason, GameOverReason::Draw);
                assert_eq!(payload.draw, Some(DrawKind::InsufficientMaterial));
                assert_eq!(payload.winner, None);
            }
            other => panic!("expected game over, got {:?}", other),
        }
        assert_eq!(
            table.status(),
            TableStatus::Terminated(Termination::Draw(DrawKind::InsufficientMaterial))
        );
    }
}
