//! Label fixup. A first pass over the instruction list builds the
//! name-to-address map; a second pass patches every address field that was
//! parsed as a label reference.

use crate::assembler::model::{Instruction, Op};
use std::collections::HashMap;
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    DuplicateLabel(String),
    UndefinedLabel(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DuplicateLabel(name) => write!(f, "label '{}' defined twice", name),
            Error::UndefinedLabel(name) => write!(f, "label '{}' is not defined", name),
        }
    }
}

fn build_label_map(insts: &[Instruction]) -> Result<HashMap<String, i32>, Error> {
    let mut map = HashMap::new();
    for inst in insts {
        for name in &inst.labels {
            if map.insert(name.clone(), inst.pc).is_some() {
                return Err(Error::DuplicateLabel(name.clone()));
            }
        }
    }
    Ok(map)
}

pub fn resolve(insts: &mut [Instruction]) -> Result<(), Error> {
    let map = build_label_map(insts)?;

    for inst in insts.iter_mut() {
        let (name, addr) = match &mut inst.op {
            Op::Cf(cf) => match &cf.label {
                Some(name) => (name.clone(), &mut cf.addr),
                None => continue,
            },
            Op::CfAlu(alu) => (alu.label.clone(), &mut alu.addr),
            _ => continue,
        };

        match map.get(&name) {
            Some(pc) => *addr = *pc,
            None => return Err(Error::UndefinedLabel(name)),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::model::{Cf, CfAlu};
    use crate::spec::cf;

    fn inst(op: Op, labels: &[&str], pc: i32) -> Instruction {
        Instruction {
            op,
            labels: labels.iter().map(|s| s.to_string()).collect(),
            span: 0..0,
            pc,
            words: Vec::new(),
        }
    }

    fn call_fs(target: &str) -> Op {
        Op::Cf(Cf {
            cf_inst: cf::INST_CALL_FS,
            label: Some(target.to_owned()),
            ..Cf::default()
        })
    }

    fn ret() -> Op {
        Op::Cf(Cf {
            cf_inst: cf::INST_RETURN,
            ..Cf::default()
        })
    }

    #[test]
    fn forward_and_backward_references() {
        let mut insts = vec![
            inst(call_fs("end"), &["start"], 0),
            inst(
                Op::CfAlu(CfAlu {
                    label: "start".to_owned(),
                    ..CfAlu::default()
                }),
                &[],
                1,
            ),
            inst(ret(), &["end"], 2),
        ];
        resolve(&mut insts).unwrap();

        match &insts[0].op {
            Op::Cf(cf) => assert_eq!(cf.addr, 2),
            other => panic!("unexpected op: {:?}", other),
        }
        match &insts[1].op {
            Op::CfAlu(alu) => assert_eq!(alu.addr, 0),
            other => panic!("unexpected op: {:?}", other),
        }
    }

    #[test]
    fn instructions_without_references_are_untouched() {
        let mut insts = vec![inst(ret(), &[], 0)];
        resolve(&mut insts).unwrap();
        match &insts[0].op {
            Op::Cf(cf) => assert_eq!(cf.addr, 0),
            other => panic!("unexpected op: {:?}", other),
        }
    }

    #[test]
    fn undefined_label() {
        let mut insts = vec![inst(call_fs("nowhere"), &[], 0)];
        assert_eq!(
            resolve(&mut insts),
            Err(Error::UndefinedLabel("nowhere".to_owned())),
        );
    }

    #[test]
    fn duplicate_label() {
        let mut insts = vec![inst(ret(), &["twice"], 0), inst(ret(), &["twice"], 1)];
        assert_eq!(
            resolve(&mut insts),
            Err(Error::DuplicateLabel("twice".to_owned())),
        );
    }
}
