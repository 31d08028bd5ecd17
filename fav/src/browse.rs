use crate::error::{Error, Result};

use flatarc::format::{format_count, format_size};
use flatarc::index::ArchiveIndex;
use flatarc::model::LazyTreeModel;
use flatarc::store::NodeId;

fn display_name(path: &str, name: &str) -> String {
    if path.is_empty() {
        "[root]".to_string()
    } else {
        name.to_string()
    }
}

fn resolve<I: ArchiveIndex>(model: &mut LazyTreeModel<I>, path: &str) -> Result<NodeId> {
    model
        .node_at(path)?
        .ok_or_else(|| Error::NotFound(format!("no directory '{}' in the archive", path)))
}

pub fn show_dirs<I: ArchiveIndex>(model: &mut LazyTreeModel<I>, path: &str) -> Result<()> {
    let id = resolve(model, path)?;
    let children = model.children(id)?.to_vec();
    println!("{:<48} {:>12} {:>10}", "Name", "Size", "Count");
    for child in children {
        let node = model.node(child)?;
        println!(
            "{:<48} {:>12} {:>10}",
            node.name(),
            format_size(node.size),
            format_count(node.count)
        );
    }
    Ok(())
}

pub fn show_files<I: ArchiveIndex>(model: &mut LazyTreeModel<I>, path: &str) -> Result<()> {
    resolve(model, path)?;
    let files = model.files_of(path)?;
    println!("{:<48} {:>12}", "Name", "Size");
    for file in &files {
        println!("{:<48} {:>12}", file.name, format_size(file.size));
    }
    if files.is_empty() {
        println!("(no direct files)");
    }
    Ok(())
}

pub fn show_tree<I: ArchiveIndex>(
    model: &mut LazyTreeModel<I>,
    path: &str,
    depth: usize,
) -> Result<()> {
    let start = resolve(model, path)?;
    render_tree(model, start, 0, depth)
}

fn render_tree<I: ArchiveIndex>(
    model: &mut LazyTreeModel<I>,
    id: NodeId,
    level: usize,
    max_depth: usize,
) -> Result<()> {
    let (label, size, count) = {
        let node = model.node(id)?;
        (display_name(&node.path, node.name()), node.size, node.count)
    };
    println!(
        "{}{}  [{}, {} entries]",
        "  ".repeat(level),
        label,
        format_size(size),
        format_count(count)
    );
    if level >= max_depth {
        return Ok(());
    }
    let children = model.children(id)?.to_vec();
    for child in children {
        render_tree(model, child, level + 1, max_depth)?;
    }
    Ok(())
}

pub fn first_file<I: ArchiveIndex>(model: &mut LazyTreeModel<I>, path: &str) -> Result<()> {
    match model.first_descendant_file(path)? {
        Some(file) => println!("{} ({})", file.name, format_size(file.size)),
        None => println!("No files under '{}'", path),
    }
    Ok(())
}

pub fn walk_listing<I: ArchiveIndex>(model: &LazyTreeModel<I>, path: &str) -> Result<()> {
    for entry in model.store().index().walk(path) {
        let entry = entry?;
        println!("{}/", display_name(&entry.dir, &entry.dir));
        for file in &entry.files {
            println!("  {}", file);
        }
    }
    Ok(())
}
