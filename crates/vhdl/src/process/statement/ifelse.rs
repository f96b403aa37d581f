use crate::declaration::DeclareWithIndent;

use super::{declare_nested, Block};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionalBlock {
    condition: String,
    block: Block,
}

impl ConditionalBlock {
    pub fn new(condition: impl Into<String>, block: Block) -> Self {
        ConditionalBlock {
            condition: condition.into(),
            block,
        }
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn block(&self) -> &Block {
        &self.block
    }
}

/// `if ... then ... elsif ... then ... else ... end if;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IfElse {
    if_block: ConditionalBlock,
    else_ifs: Vec<ConditionalBlock>,
    else_block: Option<Block>,
}

impl IfElse {
    pub fn new(condition: impl Into<String>, block: Block) -> Self {
        IfElse {
            if_block: ConditionalBlock::new(condition, block),
            else_ifs: vec![],
            else_block: None,
        }
    }

    pub fn with_else_if(mut self, condition: impl Into<String>, block: Block) -> Self {
        self.else_ifs.push(ConditionalBlock::new(condition, block));
        self
    }

    pub fn with_else(mut self, block: Block) -> Self {
        self.else_block = Some(block);
        self
    }

    pub fn if_block(&self) -> &ConditionalBlock {
        &self.if_block
    }

    pub fn else_ifs(&self) -> &[ConditionalBlock] {
        &self.else_ifs
    }

    pub fn else_block(&self) -> Option<&Block> {
        self.else_block.as_ref()
    }
}

impl DeclareWithIndent for IfElse {
    fn declare_with_indent(&self, indent_style: &str) -> String {
        let mut result = format!("if {} then\n", self.if_block.condition);
        result.push_str(&declare_nested(&self.if_block.block, indent_style));
        for else_if in &self.else_ifs {
            result.push_str(format!("elsif {} then\n", else_if.condition).as_str());
            result.push_str(&declare_nested(&else_if.block, indent_style));
        }
        if let Some(block) = &self.else_block {
            result.push_str("else\n");
            result.push_str(&declare_nested(block, indent_style));
        }
        result.push_str("end if;");
        result
    }
}
