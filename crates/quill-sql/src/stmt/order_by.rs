use quill_core::stmt::ExprColumn;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub column: ExprColumn,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl OrderBy {
    pub fn asc(column: ExprColumn) -> Self {
        Self {
            exprs: vec![OrderByExpr {
                column,
                direction: Direction::Asc,
            }],
        }
    }

    pub fn desc(column: ExprColumn) -> Self {
        Self {
            exprs: vec![OrderByExpr {
                column,
                direction: Direction::Desc,
            }],
        }
    }

    pub fn then_asc(mut self, column: ExprColumn) -> Self {
        self.exprs.push(OrderByExpr {
            column,
            direction: Direction::Asc,
        });
        self
    }

    pub fn then_desc(mut self, column: ExprColumn) -> Self {
        self.exprs.push(OrderByExpr {
            column,
            direction: Direction::Desc,
        });
        self
    }
}
