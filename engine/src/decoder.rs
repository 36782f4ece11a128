use evaluation::RawScore;

use crate::NULL_MOVE;

/// One line of engine output, reduced to what the client cares about.
#[derive(Debug, PartialEq, Eq)]
pub enum EngineOutput {
    IdName(String),
    UciOk,
    ReadyOk,
    /// An `info` line; most carry a `score cp`/`score mate` pair, some don't.
    Info { score: Option<RawScore> },
    BestMove(String),
    Unknown(String),
}

pub struct Decoder;

impl Decoder {
    pub fn decode(&self, line: &str) -> EngineOutput {
        match line {
            "uciok" => EngineOutput::UciOk,
            "readyok" => EngineOutput::ReadyOk,

            _ if line.starts_with("id name ") => self.decode_id_name(line),
            _ if line.starts_with("info") => self.decode_info(line),
            _ if line.starts_with("bestmove") => self.decode_bestmove(line),

            _ => EngineOutput::Unknown(line.to_string()),
        }
    }

    fn decode_id_name(&self, line: &str) -> EngineOutput {
        let name = line.trim_start_matches("id name ").trim();
        EngineOutput::IdName(name.to_string())
    }

    fn decode_info(&self, line: &str) -> EngineOutput {
        EngineOutput::Info {
            score: extract_score(line),
        }
    }

    fn decode_bestmove(&self, line: &str) -> EngineOutput {
        let best_move = line.split_whitespace().nth(1).unwrap_or(NULL_MOVE);
        EngineOutput::BestMove(best_move.to_string())
    }
}

fn extract_score(line: &str) -> Option<RawScore> {
    line.split_whitespace()
        .collect::<Vec<&str>>()
        .windows(3)
        .find(|w| w[0] == "score")
        .and_then(|w| match w[1] {
            "cp" => w[2].parse().ok().map(RawScore::Centipawns),
            "mate" => w[2].parse().ok().map(RawScore::Mate),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handshake_lines() {
        assert!(matches!(Decoder.decode("uciok"), EngineOutput::UciOk));
        assert!(matches!(Decoder.decode("readyok"), EngineOutput::ReadyOk));
    }

    #[test]
    fn test_id_name() {
        let EngineOutput::IdName(name) = Decoder.decode("id name Stockfish 16") else {
            panic!("Expected IdName")
        };
        assert_eq!(name, "Stockfish 16");
    }

    #[test]
    fn test_info_with_centipawn_score() {
        let line = "info depth 20 seldepth 28 multipv 1 score cp 34 nodes 518 nps 1290 pv e2e4";
        let EngineOutput::Info { score } = Decoder.decode(line) else {
            panic!("Expected Info")
        };
        assert_eq!(score, Some(RawScore::Centipawns(34)));
    }

    #[test]
    fn test_info_with_negative_centipawn_score() {
        let EngineOutput::Info { score } = Decoder.decode("info depth 12 score cp -245 pv d7d5")
        else {
            panic!("Expected Info")
        };
        assert_eq!(score, Some(RawScore::Centipawns(-245)));
    }

    #[test]
    fn test_info_with_mate_score() {
        let EngineOutput::Info { score } = Decoder.decode("info depth 31 score mate -3 nodes 99")
        else {
            panic!("Expected Info")
        };
        assert_eq!(score, Some(RawScore::Mate(-3)));
    }

    #[test]
    fn test_info_score_with_bound_qualifier() {
        let EngineOutput::Info { score } =
            Decoder.decode("info depth 8 score cp 34 lowerbound nodes 4711")
        else {
            panic!("Expected Info")
        };
        assert_eq!(score, Some(RawScore::Centipawns(34)));
    }

    #[test]
    fn test_info_without_score() {
        let EngineOutput::Info { score } = Decoder.decode("info depth 5 currmove e2e4 currmovenumber 1")
        else {
            panic!("Expected Info")
        };
        assert_eq!(score, None);
    }

    #[test]
    fn test_bestmove() {
        let EngineOutput::BestMove(best_move) = Decoder.decode("bestmove e2e4 ponder e7e5") else {
            panic!("Expected BestMove")
        };
        assert_eq!(best_move, "e2e4");
    }

    #[test]
    fn test_bare_bestmove_falls_back_to_null_move() {
        let EngineOutput::BestMove(best_move) = Decoder.decode("bestmove") else {
            panic!("Expected BestMove")
        };
        assert_eq!(best_move, NULL_MOVE);
    }

    #[test]
    fn test_unknown_line() {
        assert!(matches!(
            Decoder.decode("option name Hash type spin"),
            EngineOutput::Unknown(_)
        ));
    }
}
