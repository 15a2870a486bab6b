//! Testing utilities: canonical sample documents
//!
//!     Marked workflow scripts look just enough like ordinary Python comments
//!     to get small details wrong: hash counts, the colon in step markers,
//!     blank-line placement around regions. A test built on a slightly-off
//!     ad-hoc document asserts the wrong thing and tunes the engine to it.
//!
//!     Tests therefore use the verified samples below instead of scattering
//!     hand-written marked scripts through test files. Each sample documents
//!     its line layout where tests depend on it. Ad-hoc strings are
//!     acceptable only for the malformed-input cases a sample cannot
//!     represent (and for the literal examples fixed by the engine's
//!     contracts).

/// A complete four-step workflow document with a STEP 0 configuration
/// preamble, six node sections and one editable region.
///
/// Line layout (0-based):
/// - 0: STEP 0 marker, body lines 1-5
/// - 6: STEP 1 marker
/// - 7-18: `Graph to Hamiltonian` (region: open 13, interior 14-15, close 16)
/// - 19-22: `QAOA Circuit`
/// - 23: STEP 2 marker, 24-27: `Transpiler`
/// - 28: STEP 3 marker, 29-33: `Estimator`, 34-38: `Sampler`
/// - 39: STEP 4 marker, 40-42: `RAW`
pub const WORKFLOW: &str = r##"## STEP 0 : IBM Quantum Config
from qiskit_ibm_runtime import QiskitRuntimeService

service = QiskitRuntimeService()
backend = service.least_busy(operational=True, simulator=False)

## STEP 1 : Mapping the problem
###[Graph to Hamiltonian]
import rustworkx as rx
import numpy as np

graph = rx.PyGraph()

##### INPUT PYTHON
graph.add_nodes_from(np.arange(0, 5, 1))
graph.add_edges_from([(0, 1, 1.0), (1, 2, 1.0)])
##### END INPUT PYTHON

cost_hamiltonian = build_hamiltonian(graph)
###[QAOA Circuit]
circuit = QAOAAnsatz(cost_operator=cost_hamiltonian, reps=2)
circuit.measure_all()

## STEP 2 : Optimize Circuit
###[Transpiler]
pm = generate_preset_pass_manager(optimization_level=3, backend=backend)
candidate_circuit = pm.run(circuit)

## STEP 3 : Execute
###[Estimator]
estimator = Estimator(mode=backend)
estimator.options.resilience_level = 1
job = estimator.run([pub])

###[Sampler]
sampler = Sampler(mode=backend)
sampler.options.default_shots = 10000
counts = sampler.run([pub]).result()

## STEP 4 : Post-process
###[RAW]
import json
print(f'RESULT: {json.dumps({"type": "graph", "content": counts})}')
"##;

/// A single-step document with two plain node sections and no regions.
pub const BELL: &str = r##"## STEP 1 : Mapping the problem
###[Bell State Circuit]
chsh_circuit = QuantumCircuit(2)
chsh_circuit.h(0)
chsh_circuit.cx(0, 1)
###[CHSH Observables]
observable1 = SparsePauliOp.from_list([("ZZ", 1), ("ZX", -1)])
"##;

/// A document whose only section opens a region and never closes it.
pub const UNTERMINATED_REGION: &str = r##"## STEP 1 : Mapping the problem
###[Graph to Hamiltonian]
#### INPUT PYTHON
graph.add_nodes_from(np.arange(0, 5, 1))
"##;

/// An unmarked script: no steps, no nodes.
pub const PLAIN_SCRIPT: &str = r##"from qiskit import QuantumCircuit

qc = QuantumCircuit(2)
qc.h(0)
qc.cx(0, 1)
print('Circuit created')
"##;

/// A document with a lone step marker and nothing else.
pub const STEP_ONLY: &str = "## STEP 1 : Mapping the problem\n";

/// An agent chat reply carrying two python fences among prose.
pub const AGENT_REPLY: &str = r##"Sure - here is the updated edge list:

```python
edge_list = [(0, 1, 1.0), (1, 2, 1.0)]
```

and the node setup to go with it:

```python
graph.add_nodes_from(np.arange(0, 3, 1))
```

Let me know if the weights should differ."##;
