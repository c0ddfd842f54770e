//! SysY runtime library functions, callable without a declaration.

use crate::parser::ast::BaseType;

use super::ParamType;

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Builtin {
    pub name: &'static str,
    pub return_type: BaseType,
    pub params: &'static [ParamType],
}

impl Builtin {
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(ParamType::to_string).collect();
        format!("{} {}({})", self.return_type, self.name, params.join(", "))
    }
}

const INT: ParamType = ParamType::scalar(BaseType::Int);
const INT_ARRAY: ParamType = ParamType::array(BaseType::Int, 1);

pub static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "getint",
        return_type: BaseType::Int,
        params: &[],
    },
    Builtin {
        name: "getch",
        return_type: BaseType::Int,
        params: &[],
    },
    Builtin {
        name: "getarray",
        return_type: BaseType::Int,
        params: &[INT_ARRAY],
    },
    Builtin {
        name: "putint",
        return_type: BaseType::Void,
        params: &[INT],
    },
    Builtin {
        name: "putch",
        return_type: BaseType::Void,
        params: &[INT],
    },
    Builtin {
        name: "putarray",
        return_type: BaseType::Void,
        params: &[INT, INT_ARRAY],
    },
    Builtin {
        name: "starttime",
        return_type: BaseType::Void,
        params: &[],
    },
    Builtin {
        name: "stoptime",
        return_type: BaseType::Void,
        params: &[],
    },
];

pub fn builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}
