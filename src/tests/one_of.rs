use super::{arb_fr, fr, framework::TestFramework};
use crate::{
    circuit::Circuit,
    error::{GadgetCompilationError, GadgetError, GadgetResult, GadgetRuntimeError},
    gadgets::assert_one_of,
    writer::{Cs, FieldVar, System, WitnessGenerator},
};
use ark_bn254::Fr;
use proptest::prelude::*;

struct OneOf {
    x: Fr,
    allowed: Vec<Fr>,
}

impl OneOf {
    fn new(x: u64, allowed: &[u64]) -> Self {
        Self {
            x: fr(x),
            allowed: allowed.iter().copied().map(fr).collect(),
        }
    }
}

impl Circuit<Fr> for OneOf {
    fn synthesize<C: Cs<Fr>>(&self, cs: &mut C) -> GadgetResult<()> {
        let x = FieldVar::Var(cs.var(|| self.x));
        assert_one_of(cs, &x, &self.allowed)
    }
}

#[test]
fn test_one_of() {
    let runner = TestFramework::<Fr, _>::default()
        .circuit(OneOf::new(7, &[5, 7, 9]))
        .setup()
        .unwrap();
    assert_eq!(runner.gates().len(), 2);
    runner.prove_and_verify().unwrap();
}

#[test]
fn test_one_of_every_member() {
    let allowed = [2, 3, 5, 7, 11];
    for x in allowed {
        TestFramework::<Fr, _>::default()
            .circuit(OneOf::new(x, &allowed))
            .setup()
            .unwrap()
            .prove_and_verify()
            .unwrap();
    }
}

#[test]
fn test_one_of_not_a_member() {
    let res = TestFramework::<Fr, _>::default()
        .circuit(OneOf::new(8, &[5, 7, 9]))
        .setup()
        .unwrap()
        .prove_and_verify();

    match res {
        Err(GadgetError::RuntimeError(GadgetRuntimeError::UnsatisfiedGenericConstraint {
            row,
            annotation,
            ..
        })) => {
            // the last gate is the only assertion
            assert_eq!(row, 1);
            assert_eq!(annotation, "assert_one_of");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_one_of_pair() {
    let runner = TestFramework::<Fr, _>::default()
        .circuit(OneOf::new(0, &[0, 1]))
        .setup()
        .unwrap();
    assert_eq!(runner.gates().len(), 1);
    runner.prove_and_verify().unwrap();

    let res = TestFramework::<Fr, _>::default()
        .circuit(OneOf::new(2, &[0, 1]))
        .setup()
        .unwrap()
        .prove_and_verify();
    assert!(res.is_err());
}

#[test]
fn test_one_of_constant() {
    let mut wit = WitnessGenerator::<Fr>::default();
    assert_one_of(&mut wit, &FieldVar::Constant(fr(9)), &[fr(5), fr(7), fr(9)]).unwrap();

    // one more gate to pin the constant
    assert_eq!(wit.curr_gate_count(), 3);
    wit.verify().unwrap();
}

#[test]
fn test_one_of_too_small() {
    let mut sys = System::<Fr>::new();
    let x = FieldVar::Var(sys.var(|| fr(1)));
    for allowed in [vec![], vec![fr(1)]] {
        assert_eq!(
            assert_one_of(&mut sys, &x, &allowed),
            Err(GadgetError::CompilationError(
                GadgetCompilationError::AllowedSetTooSmall(allowed.len())
            ))
        );
    }
    assert_eq!(sys.curr_gate_count(), 0);
}

proptest! {
    #[test]
    fn test_one_of_random(
        allowed in prop::collection::vec(arb_fr(), 2..8),
        pick in any::<prop::sample::Index>(),
        outsider in arb_fr(),
    ) {
        prop_assume!(!allowed.contains(&outsider));

        let x = *pick.get(&allowed);
        let wit = TestFramework::<Fr, _>::default()
            .circuit(OneOf { x, allowed: allowed.clone() })
            .setup()
            .unwrap()
            .prove_and_verify();
        prop_assert!(wit.is_ok());
        prop_assert_eq!(wit.unwrap().curr_gate_count(), allowed.len() - 1);

        let res = TestFramework::<Fr, _>::default()
            .circuit(OneOf { x: outsider, allowed })
            .setup()
            .unwrap()
            .prove_and_verify();
        prop_assert!(res.is_err());
    }
}
