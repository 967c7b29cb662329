//! 山札 (Stock) と捨て札 (Waste) の操作ができるかを判定するよ。

use log::debug;

use crate::components::stack::{Pile, StackType};

/// 山札から1枚めくれるか。渡されたのが山札で、カードが残っていること。
pub fn can_draw(stock: &Pile) -> bool {
    stock.stack_type() == StackType::Stock && !stock.is_empty()
}

/// 捨て札をまとめて山札に戻せるか。山札が空っぽで、捨て札が1枚以上あるときだけ。
pub fn can_recycle_waste(stock: &Pile, waste: &Pile) -> bool {
    let piles_match = stock.stack_type() == StackType::Stock && waste.stack_type() == StackType::Waste;
    let result = piles_match && stock.is_empty() && !waste.is_empty();
    debug!(
        "[Stock Rule] recycle {} cards from {} into {} ({} cards) -> {}",
        waste.len(),
        waste.stack_type(),
        stock.stack_type(),
        stock.len(),
        result
    );
    result
}
