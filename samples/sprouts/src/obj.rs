use std::io::{self, Write};

use crate::sprout::SproutMesh;

/// Write `mesh` as Wavefront OBJ, with one normal per vertex.
pub fn write_obj<W: Write>(mut out: W, mesh: &SproutMesh) -> io::Result<()> {
    let buffer = mesh.buffer();
    writeln!(out, "# {} sprouts", mesh.sprouts())?;
    for p in buffer.positions() {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in buffer.normals() {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for [a, b, c] in mesh.triangles() {
        // obj indices start at 1
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    out.flush()
}
