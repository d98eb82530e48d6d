use crate::Trit;

/// Rows: current state, columns: input, both ordered `-`, `0`, `+`
const TRANSITIONS: [[Trit; 3]; 3] = [
    [Trit::Negative, Trit::Zero, Trit::Zero],
    [Trit::Negative, Trit::Zero, Trit::Positive],
    [Trit::Zero, Trit::Positive, Trit::Positive],
];

/// Next state for `state` after reading `input`
pub fn transition(state: Trit, input: Trit) -> Trit {
    TRANSITIONS[state.index()][input.index()]
}

/// Three-state automaton, starting in `Zero`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateMachine {
    state: Trit,
}

impl StateMachine {
    pub fn new() -> Self {
        Self { state: Trit::Zero }
    }

    pub fn state(&self) -> Trit {
        self.state
    }

    pub fn step(&mut self, input: Trit) -> Trit {
        self.state = transition(self.state, input);
        self.state
    }

    /// Feed every input in order and return the final state
    pub fn run(&mut self, inputs: &[Trit]) -> Trit {
        for &input in inputs {
            self.step(input);
        }
        self.state
    }

    pub fn reset(&mut self) {
        self.state = Trit::Zero;
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

pub fn process_inputs(inputs: &[Trit]) -> Trit {
    StateMachine::new().run(inputs)
}
