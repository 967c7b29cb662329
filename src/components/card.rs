// src/components/card.rs

// serde を使う宣言！セーブデータや Undo 用スナップショットにカードを書き出すよ。
use serde::{Deserialize, Serialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq, Hash: 比較したり HashSet に入れたりできるように
/// - Serialize, Deserialize: スナップショットでは `"hearts"` みたいな小文字名になるよ
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "hearts")]
    Heart, // ❤️
    #[serde(rename = "diamonds")]
    Diamond, // ♦️
    #[serde(rename = "clubs")]
    Club, // ♣️
    #[serde(rename = "spades")]
    Spade, // ♠️
}

impl Suit {
    /// スートの記号。ログ表示で使うよ。
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
            Suit::Spade => "♠",
        }
    }

    /// スートから色を決める。ハートとダイヤは赤、クラブとスペードは黒！
    pub fn color(&self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A(1), 2, 3, ..., K(13)
///
/// PartialOrd, Ord も付けて、ランクの大小比較 (`<`, `>`) もできるようにしておくよ！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

impl Rank {
    /// 1..=13 の数値を返す。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクを作る。範囲外なら None。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// ひとつ上のランク。King の上は無いので None。
    pub fn next(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.value()
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::from_value(value).ok_or_else(|| format!("rank {} is out of range 1..=13", value))
    }
}

/// 全スート。組札 (Foundation) の並びやデッキ生成の順番もこれ！
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランク (A → K)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードの色（赤か黒か）だよ。場札 (Tableau) の「色違い」ルールで使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

/// カードの「正体」。向きを除いた (スート, ランク) の組で、52枚の中で重複しないよ。
pub type CardId = (Suit, Rank);

/// カードそのものを表す構造体だよ！🃏
///
/// - `suit`: カードのスート（変わらない）
/// - `rank`: カードのランク（変わらない）
/// - `is_face_up`: 表向きなら true。これだけは変わるよ！
///
/// `PartialEq` は向きも含めた構造比較。カードの同一性だけを見たいときは [`Card::id`] を比べてね。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 新しいカード。最初は裏向き。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表向きのカードを作るヘルパー（テストや読み込みで便利）。
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    /// 向きを変える。それ以外は何もしないよ。
    pub fn flip(&mut self, face_up: bool) {
        self.is_face_up = face_up;
    }

    pub fn id(&self) -> CardId {
        (self.suit, self.rank)
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// 色が反対かどうか。赤と黒の組み合わせなら true。
    pub fn is_opposite_color(&self, other: &Card) -> bool {
        self.color() != other.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_face_up {
            write!(f, "{}{}", self.rank.label(), self.suit.symbol())
        } else {
            // 裏向きでも中身はログに出したいので括弧付きで
            write!(f, "[{}{}]", self.rank.label(), self.suit.symbol())
        }
    }
}
